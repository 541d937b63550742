// Material catalog and the open/closed classifier.
//
// `Material` is the closed catalog of block materials for one game edition.
// The wall generator itself never depends on the full catalog: it only asks
// two questions, "is this material solid?" (wall material validation) and
// "does this material read as open space?" (the classifier below).
//
// The open-material set is injectable rather than hardcoded so the core is
// portable across material catalogs. `OpenMaterials::default()` carries the
// stock set (leaves, logs, chests, water); a server with a different catalog
// supplies its own list through `WallConfig::open_materials`.
//
// See also: `wall.rs` for the selector that consumes `classify()`,
// `config.rs` for the material identifiers resolved via `from_name()`.

use crate::types::Passability;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A block material in the voxel world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Air,
    Stone,
    SmoothBrick,
    Dirt,
    Grass,
    Sand,
    Gravel,
    Bedrock,
    Obsidian,
    Glass,
    Torch,
    TallGrass,
    OakLog,
    SpruceLog,
    OakLeaves,
    SpruceLeaves,
    Chest,
    TrappedChest,
    Water,
    FlowingWater,
}

impl Material {
    /// Every material in the catalog, for exhaustive iteration in tests and
    /// tooling.
    pub const ALL: [Material; 20] = [
        Material::Air,
        Material::Stone,
        Material::SmoothBrick,
        Material::Dirt,
        Material::Grass,
        Material::Sand,
        Material::Gravel,
        Material::Bedrock,
        Material::Obsidian,
        Material::Glass,
        Material::Torch,
        Material::TallGrass,
        Material::OakLog,
        Material::SpruceLog,
        Material::OakLeaves,
        Material::SpruceLeaves,
        Material::Chest,
        Material::TrappedChest,
        Material::Water,
        Material::FlowingWater,
    ];

    /// Physically transparent: light and sight pass through.
    pub fn is_transparent(self) -> bool {
        matches!(
            self,
            Material::Air | Material::Glass | Material::Torch | Material::TallGrass
        )
    }

    /// Occupies its voxel as an obstacle. Liquids and decoration blocks are
    /// not solid; a wall may only be built from solid materials.
    pub fn is_solid(self) -> bool {
        !matches!(
            self,
            Material::Air
                | Material::Torch
                | Material::TallGrass
                | Material::Water
                | Material::FlowingWater
        )
    }

    /// Canonical identifier, the inverse of [`Material::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Material::Air => "AIR",
            Material::Stone => "STONE",
            Material::SmoothBrick => "SMOOTH_BRICK",
            Material::Dirt => "DIRT",
            Material::Grass => "GRASS",
            Material::Sand => "SAND",
            Material::Gravel => "GRAVEL",
            Material::Bedrock => "BEDROCK",
            Material::Obsidian => "OBSIDIAN",
            Material::Glass => "GLASS",
            Material::Torch => "TORCH",
            Material::TallGrass => "TALL_GRASS",
            Material::OakLog => "OAK_LOG",
            Material::SpruceLog => "SPRUCE_LOG",
            Material::OakLeaves => "OAK_LEAVES",
            Material::SpruceLeaves => "SPRUCE_LEAVES",
            Material::Chest => "CHEST",
            Material::TrappedChest => "TRAPPED_CHEST",
            Material::Water => "WATER",
            Material::FlowingWater => "FLOWING_WATER",
        }
    }

    /// Resolve a configuration identifier, case-insensitively.
    /// Returns `None` for names not in the catalog.
    pub fn from_name(name: &str) -> Option<Material> {
        let upper = name.to_ascii_uppercase();
        Material::ALL.into_iter().find(|m| m.name() == upper)
    }
}

/// The set of materials that read as open space to the wall selector even
/// though some of them are physically opaque.
///
/// Covers blocks a player could stand inside or break through without tools
/// worth protecting: tree trunks and canopies, loot chests, water. Transparent
/// materials are always open and do not need to appear in the set.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenMaterials {
    set: FxHashSet<Material>,
}

impl Default for OpenMaterials {
    fn default() -> Self {
        Self::from_materials([
            Material::OakLeaves,
            Material::SpruceLeaves,
            Material::OakLog,
            Material::SpruceLog,
            Material::Chest,
            Material::TrappedChest,
            Material::Water,
            Material::FlowingWater,
        ])
    }
}

impl OpenMaterials {
    pub fn from_materials(materials: impl IntoIterator<Item = Material>) -> Self {
        Self {
            set: materials.into_iter().collect(),
        }
    }

    /// Resolve a configured list of material identifiers.
    /// Returns `None` if any name is unknown.
    pub fn from_names(names: &[String]) -> Option<Self> {
        names
            .iter()
            .map(|name| Material::from_name(name))
            .collect::<Option<FxHashSet<Material>>>()
            .map(|set| Self { set })
    }

    /// Classify a material as open space or solid terrain.
    ///
    /// Open means transparent or a member of the set. Total over the catalog:
    /// every material maps to exactly one `Passability`.
    pub fn classify(&self, material: Material) -> Passability {
        if material.is_transparent() || self.set.contains(&material) {
            Passability::Open
        } else {
            Passability::Closed
        }
    }
}
