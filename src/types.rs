// Core types shared across the wall generator.
//
// Defines the integer voxel coordinate (`BlockPos`), the wall-side enum used
// to orient the material selector (`WallSide`), and the classification result
// (`Passability`). All types derive `Serialize` and `Deserialize` so they can
// ride along in server state snapshots.
//
// The coordinate system uses right-handed conventions:
// - X: east  (positive) / west  (negative)
// - Y: up    (positive) / down  (negative)
// - Z: south (positive) / north (negative)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the 3D voxel grid. Each component is in voxel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// This position shifted by the given deltas.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Reflection across the vertical plane x = `center_x`.
    pub fn mirror_x(self, center_x: i32) -> Self {
        Self::new(2 * center_x - self.x, self.y, self.z)
    }

    /// Reflection across the vertical plane z = `center_z`.
    pub fn mirror_z(self, center_z: i32) -> Self {
        Self::new(self.x, self.y, 2 * center_z - self.z)
    }

    /// Euclidean distance to `other` in the horizontal (XZ) plane.
    /// Y is ignored entirely.
    pub fn horizontal_distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dz = f64::from(self.z - other.z);
        (dx * dx + dz * dz).sqrt()
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Which edge of the boundary a wall voxel belongs to.
///
/// North: small Z. South: big Z. East: big X. West: small X.
/// The side determines which neighbor of a wall voxel faces the arena
/// interior (see [`WallSide::interior_offset`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    North,
    South,
    East,
    West,
}

impl WallSide {
    /// The (dx, dz) unit step from a wall voxel toward the arena interior.
    ///
    /// A voxel on the east wall has its interior neighbor one step west
    /// (x - 1), and so on. The match is exhaustive so a new side cannot be
    /// added without deciding its interior direction.
    pub fn interior_offset(self) -> (i32, i32) {
        match self {
            WallSide::East => (-1, 0),
            WallSide::West => (1, 0),
            WallSide::North => (0, 1),
            WallSide::South => (0, -1),
        }
    }
}

/// Whether a material reads as passable space or as solid terrain to the
/// wall material selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Passability {
    Open,
    Closed,
}
