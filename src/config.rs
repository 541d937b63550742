// Wall generator configuration.
//
// All tunable parameters live in `WallConfig`, loaded from JSON at startup.
// Material identifiers are kept as strings here and resolved once per build
// by the wall builder, so a typo in the config surfaces as a single
// validation failure rather than a crash.
//
// See also: `wall.rs` for `WallBuilder`, which resolves and validates these
// fields, `material.rs` for `Material::from_name()`.

use serde::{Deserialize, Serialize};

/// Tunable parameters for wall generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WallConfig {
    /// Number of wall layers above the floor layer. Must be at least 1.
    pub wall_height: i32,

    /// Identifier of the material written where the wall crosses open space
    /// (air, trees, water). Must name a solid material.
    pub replace_air: String,

    /// Identifier of the material written where the wall is enclosed by
    /// solid terrain on both faces. Must name a solid material.
    pub replace_solid: String,

    /// Optional override of the classifier's open-material set. When absent
    /// the stock set is used (leaves, logs, chests, water variants).
    #[serde(default)]
    pub open_materials: Option<Vec<String>>,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            wall_height: 16,
            replace_air: "GLASS".to_string(),
            replace_solid: "SMOOTH_BRICK".to_string(),
            open_materials: None,
        }
    }
}

impl WallConfig {
    /// Load a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
