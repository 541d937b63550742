// Border state: the shape and size of the playable region.
//
// Owned by the server's border manager; the wall builder reads it once per
// build to decide which trace to run and how far out. Shrinking or moving
// borders are the manager's business, not the wall generator's: a build
// snapshots the diameter at call time.

use serde::{Deserialize, Serialize};

/// The horizontal footprint of the playable region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderShape {
    Square,
    Round,
}

/// Current border shape and diameter, in voxels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderState {
    pub shape: BorderShape,
    pub diameter: i32,
}

impl BorderState {
    pub fn new(shape: BorderShape, diameter: i32) -> Self {
        Self { shape, diameter }
    }

    pub fn is_round(&self) -> bool {
        self.shape == BorderShape::Round
    }

    pub fn current_diameter(&self) -> i32 {
        self.diameter
    }

    /// Half the diameter, rounded down. The wall sits at this distance from
    /// the center.
    pub fn radius(&self) -> i32 {
        self.diameter.div_euclid(2)
    }
}
