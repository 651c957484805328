//! Analysis requestor
//!
//! Builds the prompt for a configuration, performs at most one service call
//! and always answers with an `AnalysisResult`. Every failure turns into a
//! fallback result and a log line, never an error.

use std::time::Instant;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::client::{ApiKey, GeminiClient, GenerativeClient};
use super::prompt::GenerationRequest;
use super::result::AnalysisResult;
use crate::room::RoomConfiguration;
use crate::settings::AnalysisSettings;

/// How an analysis call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The service answered with a valid result
    Completed,
    /// No credential, nothing was sent
    MissingCredential,
    /// The call or the response parsing failed
    ServiceFailed,
    /// The service answered without any text
    EmptyResponse,
}

impl AnalysisOutcome {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, AnalysisOutcome::Completed)
    }
}

pub struct AnalysisRequestor<C: GenerativeClient = GeminiClient> {
    credential: Option<ApiKey>,
    client: C,
}

impl AnalysisRequestor<GeminiClient> {
    /// Requestor backed by Gemini, configured from settings
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self::new(settings.api_key(), GeminiClient::from_settings(settings))
    }
}

impl<C: GenerativeClient> AnalysisRequestor<C> {
    pub fn new(credential: Option<ApiKey>, client: C) -> Self {
        Self { credential, client }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Analyse a configuration. Never fails.
    pub fn analyze(&self, config: &RoomConfiguration) -> AnalysisResult {
        self.analyze_with_outcome(config).0
    }

    /// Like `analyze`, also reporting which path was taken
    pub fn analyze_with_outcome(&self, config: &RoomConfiguration) -> (AnalysisResult, AnalysisOutcome) {
        let Some(key) = &self.credential else {
            error!("API key not configured, returning fallback analysis");
            return (AnalysisResult::fallback(), AnalysisOutcome::MissingCredential);
        };

        let request_id = Uuid::new_v4();
        let request = GenerationRequest::for_configuration(config);
        let start = Instant::now();

        info!(%request_id, model = self.client.model(), "requesting acoustic analysis");
        debug!(%request_id, prompt = %request.prompt, "analysis prompt");

        let text = match self.client.generate(key, &request) {
            Ok(text) => text,
            Err(e) => {
                warn!(%request_id, code = e.error_code(), "analysis service error: {}", e);
                return (AnalysisResult::service_unavailable(), AnalysisOutcome::ServiceFailed);
            }
        };

        let elapsed_ms = start.elapsed().as_millis() as u64;

        let text = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!(%request_id, elapsed_ms, "analysis service returned no text");
                return (AnalysisResult::fallback(), AnalysisOutcome::EmptyResponse);
            }
        };

        match AnalysisResult::from_json(&text) {
            Ok(result) => {
                info!(%request_id, elapsed_ms, stc = result.stc, "analysis completed");
                (result, AnalysisOutcome::Completed)
            }
            Err(e) => {
                warn!(%request_id, elapsed_ms, "malformed analysis response: {}", e);
                (AnalysisResult::service_unavailable(), AnalysisOutcome::ServiceFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::SERVICE_UNAVAILABLE_MESSAGE;
    use crate::error::{QuietRoomError, Result};
    use std::cell::Cell;

    struct FixedClient {
        reply: fn() -> Result<Option<String>>,
        calls: Cell<usize>,
    }

    impl FixedClient {
        fn new(reply: fn() -> Result<Option<String>>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
            }
        }
    }

    impl GenerativeClient for FixedClient {
        fn model(&self) -> &str {
            "fixed"
        }

        fn generate(&self, _key: &ApiKey, _request: &GenerationRequest) -> Result<Option<String>> {
            self.calls.set(self.calls.get() + 1);
            (self.reply)()
        }
    }

    fn key() -> Option<ApiKey> {
        ApiKey::new("test-key")
    }

    #[test]
    fn test_missing_credential_skips_call() {
        let requestor = AnalysisRequestor::new(None, FixedClient::new(|| Ok(None)));
        let (result, outcome) = requestor.analyze_with_outcome(&RoomConfiguration::default());

        assert_eq!(outcome, AnalysisOutcome::MissingCredential);
        assert_eq!(result, AnalysisResult::fallback());
        assert_eq!(requestor.client().calls.get(), 0);
    }

    #[test]
    fn test_service_error_uses_unavailable_message() {
        let requestor = AnalysisRequestor::new(
            key(),
            FixedClient::new(|| Err(QuietRoomError::ServiceStatus { status: 503 })),
        );
        let (result, outcome) = requestor.analyze_with_outcome(&RoomConfiguration::default());

        assert_eq!(outcome, AnalysisOutcome::ServiceFailed);
        assert_eq!(result.analysis, SERVICE_UNAVAILABLE_MESSAGE);
        assert_eq!(requestor.client().calls.get(), 1);
    }

    #[test]
    fn test_blank_text_is_empty_response() {
        let requestor = AnalysisRequestor::new(key(), FixedClient::new(|| Ok(Some("  ".into()))));
        let (result, outcome) = requestor.analyze_with_outcome(&RoomConfiguration::default());

        assert_eq!(outcome, AnalysisOutcome::EmptyResponse);
        assert_eq!(result, AnalysisResult::fallback());
    }

    #[test]
    fn test_outcome_fallback_flag() {
        assert!(!AnalysisOutcome::Completed.is_fallback());
        assert!(AnalysisOutcome::EmptyResponse.is_fallback());
    }
}
