//! Configuration store
//!
//! Owns the room configuration and the analysis result that belongs to it.
//! Every mutation clears the result, so a displayed analysis always matches
//! the design that produced it.

use tracing::debug;

use super::configuration::{RoomConfiguration, Selection, Slot};
use crate::analysis::AnalysisResult;
use crate::catalog::SoundSource;
use crate::error::{QuietRoomError, Result};

#[derive(Debug, Clone, Default)]
pub struct ConfigurationStore {
    configuration: RoomConfiguration,
    analysis: Option<AnalysisResult>,
    revision: u64,
}

impl ConfigurationStore {
    pub fn new(default_source: Option<SoundSource>) -> Self {
        Self {
            configuration: RoomConfiguration::with_source(default_source),
            analysis: None,
            revision: 0,
        }
    }

    pub fn configuration(&self) -> &RoomConfiguration {
        &self.configuration
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Incremented on every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Set one slot and drop any stored analysis
    pub fn set(&mut self, selection: Selection) {
        let slot = selection.slot();
        self.configuration.apply(selection);
        self.revision += 1;
        if self.analysis.take().is_some() {
            debug!(slot = ?slot, revision = self.revision, "analysis cleared by design change");
        }
    }

    /// Store a result produced for `revision`
    ///
    /// Results computed for an older revision are rejected.
    pub fn store_analysis(&mut self, result: AnalysisResult, revision: u64) -> Result<()> {
        if revision != self.revision {
            return Err(QuietRoomError::StaleAnalysis {
                requested: revision,
                current: self.revision,
            });
        }
        self.analysis = Some(result);
        Ok(())
    }

    /// Analysis can run once the outer layer is chosen
    pub fn can_analyze(&self) -> bool {
        self.configuration.outer_wall.is_some()
    }

    pub fn is_set(&self, slot: Slot) -> bool {
        self.configuration.name_of(slot).is_some()
    }
}
