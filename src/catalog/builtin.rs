//! Built-in catalog data
//!
//! Declaration order here is the order the catalog reports things in.

use super::material::{Material, MaterialCategory, Swatch};
use super::source::{EducationalConcept, SoundSource};

pub fn sound_sources() -> Vec<SoundSource> {
    vec![
        SoundSource::new(
            "drums",
            "Drum Kit",
            110,
            "🥁",
            "Extremely high sound pressure with strong low-frequency punch. The ultimate soundproofing challenge.",
        ),
        SoundSource::new(
            "piano",
            "Grand Piano",
            95,
            "🎹",
            "Full-range sound, and its mechanical vibration travels easily through the floor (structure-borne sound).",
        ),
        SoundSource::new(
            "choir",
            "Choir",
            90,
            "🗣️",
            "Mostly mid-range voices. The main challenge is keeping them from disturbing the classroom next door.",
        ),
        SoundSource::new(
            "violin",
            "Violin",
            85,
            "🎻",
            "Mostly high frequencies, which are easier to stop. A medium-difficulty challenge.",
        ),
    ]
}

pub fn materials() -> Vec<Material> {
    use MaterialCategory::*;

    vec![
        // Wall layers
        Material::new(
            "drywall_std",
            "Standard Drywall",
            WallLayer,
            "The most common wall material. Some isolation, but a single layer does not do much.",
            1,
            25,
            Swatch::Gypsum,
        ),
        Material::new(
            "drywall_sound",
            "Soundproof Drywall",
            WallLayer,
            "Contains a damping polymer layer that suppresses vibration.",
            3,
            35,
            Swatch::Gypsum,
        ),
        Material::new(
            "mlv",
            "Mass Loaded Vinyl (MLV)",
            WallLayer,
            "Dense, flexible sheet. Very thin but very heavy, adding a lot of mass to a wall.",
            4,
            28,
            Swatch::Vinyl,
        )
        .with_density("Very high for its thickness"),
        Material::new(
            "plywood",
            "Plywood",
            WallLayer,
            "Structurally strong timber board with only average isolation.",
            2,
            20,
            Swatch::Timber,
        ),
        Material::new(
            "brick",
            "Brick",
            WallLayer,
            "Very high mass and an excellent isolation base, but hard to build with.",
            2,
            45,
            Swatch::Brick,
        )
        .with_density("Very high"),
        // Cavity insulation
        Material::new(
            "air",
            "Air Gap",
            Insulation,
            "Uses a layer of air to break the sound path by decoupling the two walls.",
            0,
            5,
            Swatch::Air,
        ),
        Material::new(
            "fiberglass",
            "Fiberglass",
            Insulation,
            "Fluffy fill that absorbs reflections inside the cavity.",
            1,
            8,
            Swatch::Fibre,
        ),
        Material::new(
            "rockwool",
            "Rockwool",
            Insulation,
            "Denser than fiberglass, with better absorption and fire resistance.",
            2,
            12,
            Swatch::Fibre,
        ),
        Material::new(
            "egg_cartons",
            "Egg Cartons",
            Insulation,
            "A common soundproofing myth! Almost no isolation, and flammable.",
            0,
            0,
            Swatch::Neutral,
        )
        .as_misconception(),
        // Windows
        Material::new(
            "single_glass",
            "Single-Pane Window",
            Window,
            "Ordinary window that barely stops low-frequency noise.",
            1,
            20,
            Swatch::Glass,
        ),
        Material::new(
            "double_glass",
            "Double-Glazed Window",
            Window,
            "Two panes with an air or gas gap between them. Good isolation.",
            3,
            30,
            Swatch::Glass,
        ),
        Material::new(
            "laminated_glass",
            "Laminated Acoustic Glass",
            Window,
            "Glass bonded around a PVB interlayer that blocks low-frequency noise well.",
            4,
            38,
            Swatch::Glass,
        ),
        // Doors
        Material::new(
            "hollow_door",
            "Hollow-Core Wood Door",
            Door,
            "Hollow inside, so it offers almost no isolation.",
            1,
            15,
            Swatch::Neutral,
        ),
        Material::new(
            "solid_wood",
            "Solid Wood Door",
            Door,
            "Heavier, and isolates better than a hollow door.",
            3,
            28,
            Swatch::Timber,
        ),
        Material::new(
            "steel_acoustic",
            "Steel Acoustic Door",
            Door,
            "Professional door with seals and dense fill. Excellent isolation.",
            5,
            45,
            Swatch::Steel,
        ),
    ]
}

pub fn concepts() -> Vec<EducationalConcept> {
    vec![
        EducationalConcept::new(
            "Mass Law",
            "The heavier an object is, the harder it is for sound waves to make it vibrate, so it isolates better. Which is harder to push: a bicycle or a truck?",
            "Weight",
        ),
        EducationalConcept::new(
            "Damping",
            "Like pressing your hand on a ringing gong, damping materials turn the mechanical energy of sound into heat and use it up.",
            "Layers",
        ),
        EducationalConcept::new(
            "Decoupling",
            "A sound bridge is a shortcut for sound. Decoupling cuts those shortcuts, for example by building a room-within-a-room where inner and outer walls never touch.",
            "Scissors",
        ),
        EducationalConcept::new(
            "Sealing (Absorption vs Isolation)",
            "Isolation keeps sound out; absorption reduces echo inside. However thick the wall, a gap under the door lets sound leak through like water!",
            "Wind",
        ),
    ]
}
