//! Prompt synthesis
//!
//! Turns a room configuration into the natural-language request sent to the
//! analysis service, plus the JSON schema the reply must follow.

use serde_json::{json, Value};

use crate::room::{RoomConfiguration, Slot};

/// Octave bands the service is asked to report
pub const FREQUENCY_BANDS: [&str; 6] = ["125Hz", "250Hz", "500Hz", "1000Hz", "2000Hz", "4000Hz"];

/// Source assumed when the design has none
pub const DEFAULT_SOURCE_NAME: &str = "Standard drum kit";
pub const DEFAULT_SOURCE_DECIBELS: u32 = 100;

/// Placeholder for an empty material slot
pub const EMPTY_SLOT: &str = "none";

/// Slot order used in the prompt
const PROMPT_SLOTS: [(Slot, &str); 5] = [
    (Slot::OuterWall, "Outer layer"),
    (Slot::CavityFill, "Cavity fill"),
    (Slot::InnerWall, "Inner layer"),
    (Slot::Window, "Window"),
    (Slot::Door, "Door"),
];

/// Prompt plus response schema for one analysis call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: Value,
}

impl GenerationRequest {
    pub fn for_configuration(config: &RoomConfiguration) -> Self {
        Self {
            prompt: build_prompt(config),
            response_schema: response_schema(),
        }
    }
}

/// One line per slot, joined with ", "
pub fn describe_configuration(config: &RoomConfiguration) -> String {
    let source = match &config.source {
        Some(s) => format!("Sound source: {}, approx. {} dB", s.name, s.decibels),
        None => format!(
            "Sound source: {}, approx. {} dB",
            DEFAULT_SOURCE_NAME, DEFAULT_SOURCE_DECIBELS
        ),
    };

    let mut parts = vec![source];
    for (slot, label) in PROMPT_SLOTS {
        let name = config.name_of(slot).unwrap_or(EMPTY_SLOT);
        parts.push(format!("{}: {}", label, name));
    }
    parts.join(", ")
}

pub fn build_prompt(config: &RoomConfiguration) -> String {
    let source_name = config
        .source
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or(DEFAULT_SOURCE_NAME);

    format!(
        "As a professional acoustic engineer and physics teacher, analyse the following \
         soundproof music classroom model designed by a student.\n\
         \n\
         Design configuration:\n\
         {description}\n\
         \n\
         Teaching goal: help 8th grade students understand sound transmission, the mass law \
         and decoupling.\n\
         \n\
         Please provide:\n\
         1. An estimated STC (Sound Transmission Class) value as an overall score.\n\
         2. A detailed physical analysis of the design that an 8th grader can follow, focused \
         on how well it isolates the chosen source ({source_name}). Explain why it works or \
         does not.\n\
         3. Three concrete improvement suggestions.\n\
         4. Simulated transmission loss in dB at each frequency for charting ({bands}).\n\
         \n\
         Note: if the student used egg cartons, make sure to debunk that myth scientifically.\n",
        description = describe_configuration(config),
        source_name = source_name,
        bands = FREQUENCY_BANDS.join(", "),
    )
}

/// Schema the service must follow when answering
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "stc": {
                "type": "INTEGER",
                "description": "Estimated STC value"
            },
            "analysis": {
                "type": "STRING",
                "description": "Educational analysis for 8th graders"
            },
            "suggestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 improvement tips"
            },
            "frequency_data": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": {
                            "type": "STRING",
                            "description": "Frequency label e.g., 125Hz"
                        },
                        "value": {
                            "type": "NUMBER",
                            "description": "Transmission Loss in dB"
                        }
                    },
                    "required": ["label", "value"]
                }
            }
        },
        "required": ["stc", "analysis", "suggestions", "frequency_data"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::room::Selection;

    #[test]
    fn test_empty_slots_use_placeholder() {
        let catalog = Catalog::builtin();
        let config = RoomConfiguration::with_source(catalog.default_source().cloned());

        let description = describe_configuration(&config);
        assert_eq!(
            description,
            "Sound source: Drum Kit, approx. 110 dB, Outer layer: none, Cavity fill: none, \
             Inner layer: none, Window: none, Door: none"
        );
    }

    #[test]
    fn test_missing_source_uses_default() {
        let config = RoomConfiguration::default();
        let prompt = build_prompt(&config);
        assert!(prompt.contains("Sound source: Standard drum kit, approx. 100 dB"));
        assert!(prompt.contains("(Standard drum kit)"));
    }

    #[test]
    fn test_prompt_names_every_selection() {
        let catalog = Catalog::builtin();
        let mut config = RoomConfiguration::default();
        config.apply(Selection::OuterWall(catalog.material("brick").unwrap().clone()));
        config.apply(Selection::Door(catalog.material("steel_acoustic").unwrap().clone()));

        let prompt = build_prompt(&config);
        assert!(prompt.contains("Outer layer: Brick"));
        assert!(prompt.contains("Door: Steel Acoustic Door"));
        assert!(prompt.contains("Window: none"));
        for band in FREQUENCY_BANDS {
            assert!(prompt.contains(band));
        }
        assert!(prompt.contains("egg cartons"));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["stc", "analysis", "suggestions", "frequency_data"]);
        assert_eq!(schema["properties"]["frequency_data"]["items"]["type"], "OBJECT");
    }
}
