//! Sound sources and teaching concepts

use serde::{Deserialize, Serialize};

/// An instrument or group the room has to keep sound in for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSource {
    pub id: String,
    pub name: String,
    /// Typical sound pressure level in dB
    pub decibels: u32,
    pub icon: String,
    /// What makes this source hard to isolate
    pub description: String,
}

impl SoundSource {
    pub fn new(id: &str, name: &str, decibels: u32, icon: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            decibels,
            icon: icon.to_string(),
            description: description.to_string(),
        }
    }
}

/// A short lesson shown alongside the workbench
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationalConcept {
    pub title: String,
    pub content: String,
    pub icon: String,
}

impl EducationalConcept {
    pub fn new(title: &str, content: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            icon: icon.to_string(),
        }
    }
}
