// Grid access seam and the dense reference grid.
//
// `BlockAccess` is the narrow interface the wall generator builds through:
// read a material, write a material. The generator never walks the world or
// queries sizes, so any server-side chunk store can implement the trait.
//
// `BlockWorld` is the dense in-memory implementation, stored as a flat
// `Vec<Material>` indexed by `(y * size_z + z) * size_x + x` for O(1)
// read/write access. Out-of-bounds reads return `Air`; out-of-bounds writes
// are no-ops, so boundary math never needs special cases.
//
// See also: `wall.rs` for the builder that writes through `BlockAccess`,
// `material.rs` for the `Material` stored per voxel.

use crate::material::Material;
use crate::types::BlockPos;
use serde::{Deserialize, Serialize};

/// Read/write access to a voxel grid. The wall generator's only view of the
/// world.
pub trait BlockAccess {
    /// The material at `pos`.
    fn block(&self, pos: BlockPos) -> Material;

    /// Replace the material at `pos`.
    fn set_block(&mut self, pos: BlockPos, material: Material);
}

/// Dense 3D voxel grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockWorld {
    blocks: Vec<Material>,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
}

impl BlockWorld {
    /// Create a new world filled with `Air`.
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> Self {
        let total = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            blocks: vec![Material::Air; total],
            size_x,
            size_y,
            size_z,
        }
    }

    /// Check whether a coordinate is within bounds.
    pub fn in_bounds(&self, pos: BlockPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && (pos.x as u32) < self.size_x
            && (pos.y as u32) < self.size_y
            && (pos.z as u32) < self.size_z
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    fn index(&self, pos: BlockPos) -> Option<usize> {
        if self.in_bounds(pos) {
            let x = pos.x as usize;
            let y = pos.y as usize;
            let z = pos.z as usize;
            let sx = self.size_x as usize;
            let sz = self.size_z as usize;
            Some((y * sz + z) * sx + x)
        } else {
            None
        }
    }

    /// Fill the inclusive box from `min` to `max` with `material`.
    /// Coordinates outside the grid are skipped. Used to lay down terrain.
    pub fn fill_box(&mut self, min: BlockPos, max: BlockPos, material: Material) {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                for x in min.x..=max.x {
                    self.set_block(BlockPos::new(x, y, z), material);
                }
            }
        }
    }
}

impl BlockAccess for BlockWorld {
    /// Read a voxel. Returns `Air` for out-of-bounds coordinates.
    fn block(&self, pos: BlockPos) -> Material {
        self.index(pos)
            .map(|i| self.blocks[i])
            .unwrap_or(Material::Air)
    }

    /// Write a voxel. No-op for out-of-bounds coordinates.
    fn set_block(&mut self, pos: BlockPos, material: Material) {
        if let Some(i) = self.index(pos) {
            self.blocks[i] = material;
        }
    }
}
