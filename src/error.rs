//! Error handling for QuietRoom
//!
//! All errors carry an error code and, where it helps, recovery suggestions.
//! The analysis requestor never surfaces these to its callers; it converts
//! them into fallback results instead.

use thiserror::Error;

/// Result type alias for QuietRoom operations
pub type Result<T> = std::result::Result<T, QuietRoomError>;

/// Main error type for QuietRoom operations
#[derive(Error, Debug)]
pub enum QuietRoomError {
    // Analysis Service Errors
    #[error("API key not configured")]
    MissingCredential,

    #[error("Analysis service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error("Analysis service timed out after {timeout_ms}ms")]
    ServiceTimeout { timeout_ms: u64 },

    #[error("Analysis service returned HTTP {status}")]
    ServiceStatus { status: u16 },

    #[error("Invalid response from analysis service: {reason}")]
    InvalidResponse { reason: String },

    // Catalog Errors
    #[error("Unknown material: {id}")]
    UnknownMaterial { id: String },

    #[error("Material '{id}' is a {actual}, expected a {expected}")]
    WrongCategory {
        id: String,
        expected: String,
        actual: String,
    },

    #[error("Unknown sound source: {id}")]
    UnknownSource { id: String },

    #[error("Unknown material category: {name}")]
    UnknownCategory { name: String },

    // Workbench Errors
    #[error("Analysis needs an outer wall layer")]
    AnalysisNotReady,

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("No pending analysis with ticket {ticket}")]
    UnknownTicket { ticket: String },

    #[error("Analysis for revision {requested} is stale (configuration is at revision {current})")]
    StaleAnalysis { requested: u64, current: u64 },

    // Settings Errors
    #[error("Invalid settings: {reason}")]
    SettingsError { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QuietRoomError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            QuietRoomError::MissingCredential => "MISSING_CREDENTIAL",
            QuietRoomError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
            QuietRoomError::ServiceTimeout { .. } => "SERVICE_TIMEOUT",
            QuietRoomError::ServiceStatus { .. } => "SERVICE_STATUS",
            QuietRoomError::InvalidResponse { .. } => "INVALID_RESPONSE",
            QuietRoomError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            QuietRoomError::WrongCategory { .. } => "WRONG_CATEGORY",
            QuietRoomError::UnknownSource { .. } => "UNKNOWN_SOURCE",
            QuietRoomError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            QuietRoomError::AnalysisNotReady => "ANALYSIS_NOT_READY",
            QuietRoomError::AnalysisInProgress => "ANALYSIS_IN_PROGRESS",
            QuietRoomError::UnknownTicket { .. } => "UNKNOWN_TICKET",
            QuietRoomError::StaleAnalysis { .. } => "STALE_ANALYSIS",
            QuietRoomError::SettingsError { .. } => "SETTINGS_ERROR",
            QuietRoomError::Io(_) => "IO_ERROR",
            QuietRoomError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            QuietRoomError::ServiceUnavailable { .. } => true,
            QuietRoomError::ServiceTimeout { .. } => true,
            QuietRoomError::ServiceStatus { status } => *status == 429 || *status >= 500,
            QuietRoomError::AnalysisInProgress => true,
            QuietRoomError::StaleAnalysis { .. } => true,
            QuietRoomError::AnalysisNotReady => true,
            _ => false,
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            QuietRoomError::MissingCredential => vec![
                "Set QUIETROOM_API_KEY (or GEMINI_API_KEY) in the environment",
                "Or add \"api_key\" to the settings file passed with --settings",
            ],
            QuietRoomError::ServiceUnavailable { .. } | QuietRoomError::ServiceTimeout { .. } => {
                vec![
                    "Check your network connection",
                    "Try the analysis again in a moment",
                ]
            }
            QuietRoomError::ServiceStatus { .. } => vec![
                "Check that the API key is valid",
                "Check your API quota",
            ],
            QuietRoomError::UnknownMaterial { .. } | QuietRoomError::WrongCategory { .. } => vec![
                "Run 'quietroom-cli materials' to list material ids",
                "Filter by slot with --category",
            ],
            QuietRoomError::UnknownSource { .. } => {
                vec!["Run 'quietroom-cli sources' to list sound source ids"]
            }
            QuietRoomError::UnknownCategory { .. } => {
                vec!["Categories: wall-layer, insulation, window, door"]
            }
            QuietRoomError::AnalysisNotReady => vec!["Choose an outer wall layer first"],
            QuietRoomError::AnalysisInProgress => {
                vec!["Wait for the current analysis to finish"]
            }
            QuietRoomError::StaleAnalysis { .. } => {
                vec!["The design changed while analysing; run the analysis again"]
            }
            _ => vec![],
        }
    }
}
