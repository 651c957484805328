//! Workbench: the presentation-side controller
//!
//! Owns the configuration store, the catalog and the analysis requestor, and
//! tracks the analysis phase explicitly:
//!
//! ```text
//! Idle / Settled --begin--> Pending --complete--> Settled (or Idle if stale)
//! ```
//!
//! A second `begin` while Pending is rejected.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{AnalysisRequestor, AnalysisResult, GeminiClient, GenerativeClient};
use crate::catalog::Catalog;
use crate::error::{QuietRoomError, Result};
use crate::room::{ConfigurationStore, RoomConfiguration, Selection};

/// Handle for an analysis in flight
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTicket {
    pub id: Uuid,
    /// Store revision the analysis was started for
    pub revision: u64,
    pub configuration: RoomConfiguration,
    pub started_at: DateTime<Utc>,
}

/// Current analysis phase as seen by the view
#[derive(Debug, PartialEq)]
pub enum AnalysisPhase<'a> {
    Idle,
    Pending(&'a AnalysisTicket),
    Settled {
        result: &'a AnalysisResult,
        completed_at: Option<DateTime<Utc>>,
    },
}

/// What happened to a completed analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Stored,
    /// The design changed while the analysis ran
    Discarded,
}

pub struct Workbench<C: GenerativeClient = GeminiClient> {
    catalog: Catalog,
    store: ConfigurationStore,
    requestor: AnalysisRequestor<C>,
    pending: Option<AnalysisTicket>,
    completed_at: Option<DateTime<Utc>>,
}

impl<C: GenerativeClient> Workbench<C> {
    /// New design starting from the catalog's default source
    pub fn new(catalog: Catalog, requestor: AnalysisRequestor<C>) -> Self {
        let store = ConfigurationStore::new(catalog.default_source().cloned());
        Self {
            catalog,
            store,
            requestor,
            pending: None,
            completed_at: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &ConfigurationStore {
        &self.store
    }

    pub fn configuration(&self) -> &RoomConfiguration {
        self.store.configuration()
    }

    pub fn requestor(&self) -> &AnalysisRequestor<C> {
        &self.requestor
    }

    /// Change one slot; clears the displayed analysis
    pub fn select(&mut self, selection: Selection) {
        self.store.set(selection);
        self.completed_at = None;
    }

    /// Whether the "run analysis" action is available
    pub fn run_enabled(&self) -> bool {
        self.store.can_analyze()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> AnalysisPhase<'_> {
        if let Some(ticket) = &self.pending {
            return AnalysisPhase::Pending(ticket);
        }
        match self.store.analysis() {
            Some(result) => AnalysisPhase::Settled {
                result,
                completed_at: self.completed_at,
            },
            None => AnalysisPhase::Idle,
        }
    }

    /// Enter Pending for the current configuration
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket> {
        if self.pending.is_some() {
            return Err(QuietRoomError::AnalysisInProgress);
        }
        if !self.run_enabled() {
            return Err(QuietRoomError::AnalysisNotReady);
        }

        let ticket = AnalysisTicket {
            id: Uuid::new_v4(),
            revision: self.store.revision(),
            configuration: self.store.configuration().clone(),
            started_at: Utc::now(),
        };
        info!(ticket = %ticket.id, revision = ticket.revision, "analysis started");
        self.pending = Some(ticket.clone());
        Ok(ticket)
    }

    /// Leave Pending with the result produced for `ticket`
    pub fn complete_analysis(&mut self, ticket: &AnalysisTicket, result: AnalysisResult) -> Result<Completion> {
        match &self.pending {
            Some(pending) if pending.id == ticket.id => {}
            _ => {
                return Err(QuietRoomError::UnknownTicket {
                    ticket: ticket.id.to_string(),
                })
            }
        }
        self.pending = None;

        match self.store.store_analysis(result, ticket.revision) {
            Ok(()) => {
                self.completed_at = Some(Utc::now());
                info!(ticket = %ticket.id, "analysis stored");
                Ok(Completion::Stored)
            }
            Err(QuietRoomError::StaleAnalysis { requested, current }) => {
                warn!(ticket = %ticket.id, requested, current, "design changed during analysis, result discarded");
                Ok(Completion::Discarded)
            }
            Err(e) => Err(e),
        }
    }

    /// Begin, analyse and complete in one step
    pub fn run_analysis(&mut self) -> Result<&AnalysisResult> {
        let ticket = self.begin_analysis()?;
        let result = self.requestor.analyze(&ticket.configuration);
        self.complete_analysis(&ticket, result)?;
        self.store.analysis().ok_or(QuietRoomError::StaleAnalysis {
            requested: ticket.revision,
            current: self.store.revision(),
        })
    }
}

impl Workbench<GeminiClient> {
    /// Built-in catalog with a Gemini-backed requestor
    pub fn with_gemini(requestor: AnalysisRequestor<GeminiClient>) -> Self {
        Self::new(Catalog::builtin(), requestor)
    }
}
