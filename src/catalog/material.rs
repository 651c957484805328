//! Material types
//!
//! Materials are immutable reference data. Each one carries its own render
//! swatch and a misconception flag, so presentation code never has to guess
//! from identifiers.

use serde::{Deserialize, Serialize};

/// Which part of the room a material can be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialCategory {
    /// Structural layer, usable as outer or inner wall
    WallLayer,
    /// Cavity fill between the two wall layers
    Insulation,
    Window,
    Door,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 4] = [
        MaterialCategory::WallLayer,
        MaterialCategory::Insulation,
        MaterialCategory::Window,
        MaterialCategory::Door,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WallLayer => "wall-layer",
            Self::Insulation => "insulation",
            Self::Window => "window",
            Self::Door => "door",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wall-layer" | "wall_layer" | "wall" | "layer" => Some(Self::WallLayer),
            "insulation" | "cavity" | "fill" => Some(Self::Insulation),
            "window" => Some(Self::Window),
            "door" => Some(Self::Door),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::WallLayer => "Structural wall layer",
            Self::Insulation => "Cavity insulation",
            Self::Window => "Window glazing",
            Self::Door => "Door",
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render colour of a material in the schematic preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Brick,
    Gypsum,
    Vinyl,
    Timber,
    Air,
    Fibre,
    Glass,
    Steel,
    Neutral,
}

impl Swatch {
    /// Colour used for a slot with nothing selected
    pub const EMPTY_HEX: &'static str = "#1e293b";

    pub fn hex(&self) -> &'static str {
        match self {
            Self::Brick => "#ef4444",
            Self::Gypsum => "#e2e8f0",
            Self::Vinyl => "#111827",
            Self::Timber => "#d97706",
            Self::Air => "#60a5fa",
            Self::Fibre => "#fcd34d",
            Self::Glass => "#93c5fd",
            Self::Steel => "#94a3b8",
            Self::Neutral => "#475569",
        }
    }
}

/// A building material the student can place in a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: MaterialCategory,
    pub description: String,
    /// Relative cost, 0 (free) to 5 (expensive)
    pub cost_index: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<String>,
    /// Approximate STC contribution of this material on its own
    pub stc_base: i32,
    pub swatch: Swatch,
    /// Popular but ineffective soundproofing material
    #[serde(default)]
    pub misconception: bool,
}

impl Material {
    pub fn new(
        id: &str,
        name: &str,
        category: MaterialCategory,
        description: &str,
        cost_index: u8,
        stc_base: i32,
        swatch: Swatch,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            cost_index: cost_index.min(5),
            density: None,
            stc_base,
            swatch,
            misconception: false,
        }
    }

    pub fn with_density(mut self, density: &str) -> Self {
        self.density = Some(density.to_string());
        self
    }

    pub fn as_misconception(mut self) -> Self {
        self.misconception = true;
        self
    }
}
