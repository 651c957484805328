//! Room configuration: the student's current design

use serde::{Deserialize, Serialize};

use crate::catalog::{Material, SoundSource};

/// One of the six selectable parts of a design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Source,
    OuterWall,
    CavityFill,
    InnerWall,
    Door,
    Window,
}

impl Slot {
    /// Display order of the summary panel
    pub const ALL: [Slot; 6] = [
        Slot::Source,
        Slot::OuterWall,
        Slot::CavityFill,
        Slot::InnerWall,
        Slot::Door,
        Slot::Window,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::OuterWall => "Outer wall",
            Self::CavityFill => "Cavity fill",
            Self::InnerWall => "Inner wall",
            Self::Door => "Door",
            Self::Window => "Window",
        }
    }
}

/// A value for one slot
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Source(SoundSource),
    OuterWall(Material),
    CavityFill(Material),
    InnerWall(Material),
    Door(Material),
    Window(Material),
}

impl Selection {
    pub fn slot(&self) -> Slot {
        match self {
            Self::Source(_) => Slot::Source,
            Self::OuterWall(_) => Slot::OuterWall,
            Self::CavityFill(_) => Slot::CavityFill,
            Self::InnerWall(_) => Slot::InnerWall,
            Self::Door(_) => Slot::Door,
            Self::Window(_) => Slot::Window,
        }
    }
}

/// Sound source plus up to five material slots, each independently empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomConfiguration {
    pub source: Option<SoundSource>,
    pub outer_wall: Option<Material>,
    pub cavity_fill: Option<Material>,
    pub inner_wall: Option<Material>,
    pub door: Option<Material>,
    pub window: Option<Material>,
}

impl RoomConfiguration {
    /// Fresh design: every slot empty except the sound source
    pub fn with_source(source: Option<SoundSource>) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Replace exactly one slot
    pub fn apply(&mut self, selection: Selection) {
        match selection {
            Selection::Source(s) => self.source = Some(s),
            Selection::OuterWall(m) => self.outer_wall = Some(m),
            Selection::CavityFill(m) => self.cavity_fill = Some(m),
            Selection::InnerWall(m) => self.inner_wall = Some(m),
            Selection::Door(m) => self.door = Some(m),
            Selection::Window(m) => self.window = Some(m),
        }
    }

    pub fn material(&self, slot: Slot) -> Option<&Material> {
        match slot {
            Slot::Source => None,
            Slot::OuterWall => self.outer_wall.as_ref(),
            Slot::CavityFill => self.cavity_fill.as_ref(),
            Slot::InnerWall => self.inner_wall.as_ref(),
            Slot::Door => self.door.as_ref(),
            Slot::Window => self.window.as_ref(),
        }
    }

    /// Display name of whatever occupies `slot`
    pub fn name_of(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Source => self.source.as_ref().map(|s| s.name.as_str()),
            other => self.material(other).map(|m| m.name.as_str()),
        }
    }

    /// Selected materials in slot order
    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        [
            &self.outer_wall,
            &self.cavity_fill,
            &self.inner_wall,
            &self.door,
            &self.window,
        ]
        .into_iter()
        .flatten()
    }

    /// True if the design uses a known ineffective material
    pub fn has_misconception(&self) -> bool {
        self.materials().any(|m| m.misconception)
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.materials().next().is_none()
    }
}
