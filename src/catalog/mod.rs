//! Material catalog
//!
//! Read-only reference data: materials, sound sources and educational
//! concepts. Lookups preserve declaration order.

mod builtin;
mod material;
mod source;

pub use material::{Material, MaterialCategory, Swatch};
pub use source::{EducationalConcept, SoundSource};

use crate::error::{QuietRoomError, Result};

/// Static catalog of everything a student can pick from
#[derive(Debug, Clone)]
pub struct Catalog {
    materials: Vec<Material>,
    sources: Vec<SoundSource>,
    concepts: Vec<EducationalConcept>,
}

impl Catalog {
    /// Create a catalog from custom data
    pub fn new(
        materials: Vec<Material>,
        sources: Vec<SoundSource>,
        concepts: Vec<EducationalConcept>,
    ) -> Self {
        Self {
            materials,
            sources,
            concepts,
        }
    }

    /// The catalog shipped with QuietRoom
    pub fn builtin() -> Self {
        Self::new(builtin::materials(), builtin::sound_sources(), builtin::concepts())
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Materials of one category, in catalog order
    pub fn materials_by_category(&self, category: MaterialCategory) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up a material and check it belongs to `category`
    pub fn material_in(&self, category: MaterialCategory, id: &str) -> Result<&Material> {
        let material = self.material(id).ok_or_else(|| QuietRoomError::UnknownMaterial {
            id: id.to_string(),
        })?;

        if material.category != category {
            return Err(QuietRoomError::WrongCategory {
                id: id.to_string(),
                expected: category.to_string(),
                actual: material.category.to_string(),
            });
        }

        Ok(material)
    }

    pub fn sound_sources(&self) -> &[SoundSource] {
        &self.sources
    }

    pub fn sound_source(&self, id: &str) -> Result<&SoundSource> {
        self.sources
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| QuietRoomError::UnknownSource { id: id.to_string() })
    }

    /// Source a fresh configuration starts with (the first declared)
    pub fn default_source(&self) -> Option<&SoundSource> {
        self.sources.first()
    }

    pub fn concepts(&self) -> &[EducationalConcept] {
        &self.concepts
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(MaterialCategory::WallLayer, &["drywall_std", "drywall_sound", "mlv", "plywood", "brick"])]
    #[test_case(MaterialCategory::Insulation, &["air", "fiberglass", "rockwool", "egg_cartons"])]
    #[test_case(MaterialCategory::Window, &["single_glass", "double_glass", "laminated_glass"])]
    #[test_case(MaterialCategory::Door, &["hollow_door", "solid_wood", "steel_acoustic"])]
    fn test_materials_by_category_in_catalog_order(category: MaterialCategory, expected: &[&str]) {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog
            .materials_by_category(category)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_lookup_is_stable_across_calls() {
        let catalog = Catalog::builtin();
        let first = catalog.materials_by_category(MaterialCategory::WallLayer);
        let second = catalog.materials_by_category(MaterialCategory::WallLayer);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_category_yields_nothing() {
        let catalog = Catalog::new(
            builtin::materials()
                .into_iter()
                .filter(|m| m.category != MaterialCategory::Window)
                .collect(),
            builtin::sound_sources(),
            Vec::new(),
        );
        assert!(catalog.materials_by_category(MaterialCategory::Window).is_empty());
        assert_eq!(catalog.materials_by_category(MaterialCategory::Door).len(), 3);
    }

    #[test]
    fn test_material_in_checks_category() {
        let catalog = Catalog::builtin();
        assert!(catalog.material_in(MaterialCategory::WallLayer, "brick").is_ok());

        let err = catalog
            .material_in(MaterialCategory::Door, "brick")
            .unwrap_err();
        assert_eq!(err.error_code(), "WRONG_CATEGORY");

        let err = catalog
            .material_in(MaterialCategory::Door, "cardboard")
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_MATERIAL");
    }

    #[test]
    fn test_default_source_is_drums() {
        let catalog = Catalog::builtin();
        let source = catalog.default_source().unwrap();
        assert_eq!(source.id, "drums");
        assert_eq!(source.decibels, 110);
        assert_eq!(catalog.sound_sources().len(), 4);
        assert_eq!(catalog.concepts().len(), 4);
    }

    #[test]
    fn test_only_egg_cartons_are_flagged() {
        let catalog = Catalog::builtin();
        let flagged: Vec<&str> = catalog
            .materials()
            .iter()
            .filter(|m| m.misconception)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(flagged, vec!["egg_cartons"]);
    }
}
