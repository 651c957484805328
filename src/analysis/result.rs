//! Analysis result and the fixed fallback values

use serde::{Deserialize, Deserializer, Serialize};

/// STC reported when no real analysis is available
pub const FALLBACK_STC: i32 = 30;

/// Narrative used when the service call or response parsing fails
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "The AI analysis service is temporarily unavailable. Please try again later or check your API quota.";

const FALLBACK_ANALYSIS: &str = "Could not reach the AI acoustics advisor. Please check the API key configuration. \
     Based on basic rules: your design shows a clear sound bridging effect.";

const FALLBACK_SUGGESTIONS: [&str; 2] = [
    "Try adding an API key to get the full analysis.",
    "Check your network connection.",
];

const FALLBACK_FREQUENCIES: [(&str, f64); 4] = [
    ("125Hz", 10.0),
    ("500Hz", 25.0),
    ("1000Hz", 35.0),
    ("4000Hz", 45.0),
];

/// Transmission loss at one frequency band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    /// Band label, e.g. "125Hz"
    pub label: String,
    /// Transmission loss in dB
    pub value: f64,
}

impl FrequencyPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Estimated performance of a design
///
/// Field names match the JSON the analysis service is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "deserialize_stc")]
    pub stc: i32,
    pub analysis: String,
    pub suggestions: Vec<String>,
    pub frequency_data: Vec<FrequencyPoint>,
}

impl AnalysisResult {
    /// Generic result used when no credential is configured
    pub fn fallback() -> Self {
        Self {
            stc: FALLBACK_STC,
            analysis: FALLBACK_ANALYSIS.to_string(),
            suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            frequency_data: FALLBACK_FREQUENCIES
                .iter()
                .map(|(label, value)| FrequencyPoint::new(label, *value))
                .collect(),
        }
    }

    /// Fallback with the narrative replaced by the service-unavailable notice
    pub fn service_unavailable() -> Self {
        Self {
            analysis: SERVICE_UNAVAILABLE_MESSAGE.to_string(),
            ..Self::fallback()
        }
    }

    /// Parse the JSON text returned by the service
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

// The service schema types `stc` as a number; integral floats such as `58.0`
// are accepted and fractional scores round to the nearest integer.
fn deserialize_stc<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(serde::de::Error::custom(format!("stc out of range: {}", value)));
    }
    Ok(value.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fallback_shape() {
        let fallback = AnalysisResult::fallback();
        assert_eq!(fallback.stc, 30);
        assert_eq!(fallback.suggestions.len(), 2);
        assert_eq!(fallback.frequency_data.len(), 4);
        assert!(fallback.analysis.contains("API key"));
    }

    #[test]
    fn test_service_unavailable_keeps_fallback_data() {
        let unavailable = AnalysisResult::service_unavailable();
        let fallback = AnalysisResult::fallback();
        assert_eq!(unavailable.analysis, SERVICE_UNAVAILABLE_MESSAGE);
        assert_eq!(unavailable.stc, fallback.stc);
        assert_eq!(unavailable.suggestions, fallback.suggestions);
        assert_eq!(unavailable.frequency_data, fallback.frequency_data);
    }

    #[test]
    fn test_parse_accepts_integral_float_stc() {
        let result = AnalysisResult::from_json(
            r#"{"stc": 58.0, "analysis": "ok", "suggestions": [], "frequency_data": []}"#,
        )
        .unwrap();
        assert_eq!(result.stc, 58);
    }

    #[test]
    fn test_parse_does_not_clamp() {
        let result = AnalysisResult::from_json(
            r#"{"stc": 140, "analysis": "huge", "suggestions": ["a"], "frequency_data": [{"label": "125Hz", "value": -3}]}"#,
        )
        .unwrap();
        assert_eq!(result.stc, 140);
        assert_eq!(result.frequency_data[0].value, -3.0);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(AnalysisResult::from_json(r#"{"stc": 40, "analysis": "x"}"#).is_err());
        assert!(AnalysisResult::from_json("not json").is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(AnalysisResult::fallback()).unwrap();
        assert_eq!(json["stc"], 30);
        assert_eq!(json["frequency_data"][0]["label"], "125Hz");
        assert_eq!(json["frequency_data"][0]["value"], 10.0);
    }
}
