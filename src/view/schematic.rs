//! Section-view schematic of a design
//!
//! Resolves every layer to its render colour. Drawing is left to the caller;
//! `render` produces a plain text legend.

use serde::Serialize;

use crate::catalog::{Material, Swatch};
use crate::room::{RoomConfiguration, Slot};

/// Icon drawn when no source is selected
pub const DEFAULT_SOURCE_ICON: &str = "♫";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerPaint {
    pub slot: Slot,
    pub material: Option<String>,
    pub color: &'static str,
}

impl LayerPaint {
    fn from_slot(slot: Slot, material: Option<&Material>) -> Self {
        Self {
            slot,
            material: material.map(|m| m.name.clone()),
            color: material.map(|m| m.swatch.hex()).unwrap_or(Swatch::EMPTY_HEX),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.material.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schematic {
    pub source_icon: String,
    /// Outer wall, cavity, inner wall; from outside in
    pub layers: [LayerPaint; 3],
    pub door: Option<LayerPaint>,
    pub window: Option<LayerPaint>,
}

impl Schematic {
    pub fn of(config: &RoomConfiguration) -> Self {
        let feature = |slot: Slot| {
            config
                .material(slot)
                .map(|m| LayerPaint::from_slot(slot, Some(m)))
        };

        Self {
            source_icon: config
                .source
                .as_ref()
                .map(|s| s.icon.clone())
                .unwrap_or_else(|| DEFAULT_SOURCE_ICON.to_string()),
            layers: [
                LayerPaint::from_slot(Slot::OuterWall, config.outer_wall.as_ref()),
                LayerPaint::from_slot(Slot::CavityFill, config.cavity_fill.as_ref()),
                LayerPaint::from_slot(Slot::InnerWall, config.inner_wall.as_ref()),
            ],
            door: feature(Slot::Door),
            window: feature(Slot::Window),
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("SECTION VIEW  source {}  ->  listener\n", self.source_icon);
        let features = [&self.window, &self.door];
        let painted = self
            .layers
            .iter()
            .chain(features.into_iter().flatten());

        for paint in painted {
            out.push_str(&format!(
                "  {:<12} {:<8} {}\n",
                paint.slot.label(),
                paint.color,
                paint.material.as_deref().unwrap_or("(empty)")
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::room::Selection;

    #[test]
    fn test_empty_design_paints_empty_color() {
        let schematic = Schematic::of(&RoomConfiguration::default());
        assert_eq!(schematic.source_icon, DEFAULT_SOURCE_ICON);
        assert!(schematic.layers.iter().all(|l| l.color == Swatch::EMPTY_HEX));
        assert!(schematic.door.is_none());
        assert!(schematic.window.is_none());
    }

    #[test]
    fn test_colors_come_from_swatches() {
        let catalog = Catalog::builtin();
        let mut config = RoomConfiguration::with_source(catalog.default_source().cloned());
        config.apply(Selection::OuterWall(catalog.material("brick").unwrap().clone()));
        config.apply(Selection::CavityFill(catalog.material("rockwool").unwrap().clone()));
        config.apply(Selection::Door(catalog.material("steel_acoustic").unwrap().clone()));

        let schematic = Schematic::of(&config);
        assert_eq!(schematic.layers[0].color, "#ef4444");
        assert_eq!(schematic.layers[1].color, "#fcd34d");
        assert!(schematic.layers[2].is_empty());
        assert_eq!(schematic.door.as_ref().unwrap().color, "#94a3b8");
        assert_eq!(schematic.source_icon, "🥁");

        let text = schematic.render();
        assert!(text.contains("Brick"));
        assert!(text.contains("(empty)"));
        assert!(!text.contains("Window"));
    }
}
