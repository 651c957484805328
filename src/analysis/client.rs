//! Generative service clients
//!
//! `GenerativeClient` is the seam between the analysis requestor and the
//! outside world. `GeminiClient` talks to the Gemini `generateContent` REST
//! endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prompt::GenerationRequest;
use crate::error::{QuietRoomError, Result};
use crate::settings::AnalysisSettings;

/// Credential for the analysis service
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// `None` for empty or whitespace-only keys
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Something that can answer a generation request with text
pub trait GenerativeClient {
    /// Identifier used in logs
    fn model(&self) -> &str;

    /// Issue one request. `Ok(None)` means the service answered with no text.
    fn generate(&self, key: &ApiKey, request: &GenerationRequest) -> Result<Option<String>>;
}

impl<C: GenerativeClient + ?Sized> GenerativeClient for &C {
    fn model(&self) -> &str {
        (**self).model()
    }

    fn generate(&self, key: &ApiKey, request: &GenerationRequest) -> Result<Option<String>> {
        (**self).generate(key, request)
    }
}

/// Request body for `generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &request.response_schema,
            },
        }
    }
}

/// Response envelope from `generateContent`
#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Client for the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    endpoint: String,
    model: String,
    timeout_ms: Option<u64>,
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            timeout_ms: None,
        }
    }

    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            timeout_ms: settings.timeout_ms,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    #[cfg(feature = "gemini")]
    fn send_request(&self, key: &ApiKey, body: &GenerateContentRequest<'_>) -> Result<GenerateContentResponse> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout_ms) = self.timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| QuietRoomError::ServiceUnavailable {
                reason: e.to_string(),
            })?;

        let response = client
            .post(self.url())
            .header("x-goog-api-key", key.expose())
            .json(body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    QuietRoomError::ServiceTimeout {
                        timeout_ms: self.timeout_ms.unwrap_or_default(),
                    }
                } else if e.is_connect() {
                    QuietRoomError::ServiceUnavailable {
                        reason: format!("Cannot connect to {}: {}", self.endpoint, e),
                    }
                } else {
                    QuietRoomError::ServiceUnavailable {
                        reason: e.to_string(),
                    }
                }
            })?;

        if !response.status().is_success() {
            return Err(QuietRoomError::ServiceStatus {
                status: response.status().as_u16(),
            });
        }

        response
            .json::<GenerateContentResponse>()
            .map_err(|e| QuietRoomError::InvalidResponse {
                reason: e.to_string(),
            })
    }

    #[cfg(not(feature = "gemini"))]
    fn send_request(&self, _key: &ApiKey, _body: &GenerateContentRequest<'_>) -> Result<GenerateContentResponse> {
        Err(QuietRoomError::ServiceUnavailable {
            reason: "Gemini support not compiled. Build with --features gemini".to_string(),
        })
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::from_settings(&AnalysisSettings::default())
    }
}

impl GenerativeClient for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    fn generate(&self, key: &ApiKey, request: &GenerationRequest) -> Result<Option<String>> {
        let body = GenerateContentRequest::from_request(request);
        let response = self.send_request(key, &body)?;
        Ok(response.text())
    }
}
