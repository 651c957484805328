//! Acoustic analysis via an external generative service
//!
//! This module provides:
//! - `AnalysisRequestor`, the total analyse-or-fallback operation
//! - `GenerativeClient` trait and the Gemini implementation
//! - Prompt and response schema synthesis
//! - `AnalysisResult` with its fixed fallback values

pub mod client;
pub mod prompt;
mod requestor;
mod result;

pub use client::{ApiKey, GeminiClient, GenerativeClient};
pub use prompt::{build_prompt, describe_configuration, GenerationRequest, FREQUENCY_BANDS};
pub use requestor::{AnalysisOutcome, AnalysisRequestor};
pub use result::{AnalysisResult, FrequencyPoint, FALLBACK_STC, SERVICE_UNAVAILABLE_MESSAGE};
