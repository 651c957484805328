//! Analysis settings
//!
//! Credential, model, endpoint and timeout for the analysis service. Values
//! come from defaults, an optional JSON file, then environment variables,
//! each overriding the previous.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::ApiKey;
use crate::error::{QuietRoomError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order
pub const API_KEY_VARS: [&str; 3] = ["QUIETROOM_API_KEY", "GEMINI_API_KEY", "API_KEY"];
pub const MODEL_VAR: &str = "QUIETROOM_MODEL";
pub const ENDPOINT_VAR: &str = "QUIETROOM_ENDPOINT";
pub const TIMEOUT_VAR: &str = "QUIETROOM_TIMEOUT_MS";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// Request timeout; the transport default applies when unset
    pub timeout_ms: Option<u64>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: None,
        }
    }
}

impl std::fmt::Debug for AnalysisSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl AnalysisSettings {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|name| env::var(name).ok())
    }

    /// Load a JSON settings file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| QuietRoomError::SettingsError {
            reason: format!("{}: {}", path.display(), e),
        })
    }

    /// Optional file, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from any variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup(MODEL_VAR) {
            self.model = model;
        }
        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            let timeout_ms = timeout.trim().parse().map_err(|_| QuietRoomError::SettingsError {
                reason: format!("{} must be a number of milliseconds, got '{}'", TIMEOUT_VAR, timeout),
            })?;
            self.timeout_ms = Some(timeout_ms);
        }
        Ok(self)
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Usable credential, if any
    pub fn api_key(&self) -> Option<ApiKey> {
        self.api_key.as_deref().and_then(ApiKey::new)
    }
}
