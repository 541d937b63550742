// Boundary wall generation.
//
// Builds an impassable wall around the playable region, square or round,
// from the floor layer up to the configured height. Two materials are
// written so the wall blends into the terrain: `replace_air` where a wall
// voxel touches open space, `replace_solid` where it is buried in solid
// ground on both faces.
//
// The round trace computes one quadrant of the circle (south-east, from
// angle 0 at x = center.x + radius to the z axis) with a nearest-distance
// stepping rule, then mirrors every point into the other three quadrants.
// The square trace walks the four edges directly.
//
// Both traces write a fixed bedrock floor at y = 0 and wall material from
// y = 1 to y = wall_height; every column goes through the material selector.
//
// See also: `material.rs` for the open/closed classifier, `world.rs` for
// the `BlockAccess` seam, `config.rs` and `border.rs` for the inputs.

use crate::border::BorderState;
use crate::config::WallConfig;
use crate::material::{Material, OpenMaterials};
use crate::types::{BlockPos, Passability, WallSide};
use crate::world::BlockAccess;
use log::{debug, error, info};

/// Material written at the floor layer of the wall. Never classified and
/// never substituted.
const FLOOR_MATERIAL: Material = Material::Bedrock;

/// Grid layer of the wall floor. Wall columns occupy
/// `FLOOR_Y + 1 ..= FLOOR_Y + wall_height`.
const FLOOR_Y: i32 = 0;

/// The resolved replacement pair. Both are validated solid before any write.
#[derive(Clone, Copy, Debug)]
struct WallMaterials {
    open_replacement: Material,
    solid_replacement: Material,
}

/// Entry point for wall generation.
///
/// Holds a borrowed configuration; material identifiers are resolved fresh
/// on every [`WallBuilder::build`] call, so a config reload takes effect on
/// the next build without reconstructing the builder.
pub struct WallBuilder<'a> {
    config: &'a WallConfig,
}

impl<'a> WallBuilder<'a> {
    pub fn new(config: &'a WallConfig) -> Self {
        Self { config }
    }

    /// Generate the wall around `center`, shaped and sized by `border`.
    ///
    /// Returns `false` without touching the grid when the configured
    /// materials do not validate: either identifier unresolvable, either
    /// resolved material non-solid, or an unresolvable open-set override.
    /// Returns `true` once the boundary has been written.
    pub fn build<G: BlockAccess>(
        &self,
        grid: &mut G,
        center: BlockPos,
        border: &BorderState,
    ) -> bool {
        let Some((materials, open)) = self.resolve_materials() else {
            return false;
        };

        let mut run = WallRun {
            grid,
            center,
            materials,
            open,
            height: self.config.wall_height,
        };

        if border.is_round() {
            run.build_round(border.current_diameter());
        } else {
            run.build_square(border.current_diameter());
        }
        true
    }

    /// Resolve and validate the configured materials. Logs one severe
    /// message and returns `None` on the first problem found.
    fn resolve_materials(&self) -> Option<(WallMaterials, OpenMaterials)> {
        let open_replacement = Material::from_name(&self.config.replace_air);
        let solid_replacement = Material::from_name(&self.config.replace_solid);

        let (open_replacement, solid_replacement) = match (open_replacement, solid_replacement) {
            (Some(a), Some(s)) if a.is_solid() && s.is_solid() => (a, s),
            _ => {
                error!(
                    "wall materials invalid: replace_air={:?} and replace_solid={:?} must both name solid materials",
                    self.config.replace_air, self.config.replace_solid
                );
                return None;
            }
        };

        let open = match &self.config.open_materials {
            Some(names) => match OpenMaterials::from_names(names) {
                Some(open) => open,
                None => {
                    error!("open-material override contains unknown names: {names:?}");
                    return None;
                }
            },
            None => OpenMaterials::default(),
        };

        Some((
            WallMaterials {
                open_replacement,
                solid_replacement,
            },
            open,
        ))
    }
}

/// One in-progress build: the grid plus everything resolved up front.
struct WallRun<'g, G> {
    grid: &'g mut G,
    center: BlockPos,
    materials: WallMaterials,
    open: OpenMaterials,
    height: i32,
}

impl<G: BlockAccess> WallRun<'_, G> {
    /// Write one wall voxel, picking the material from the voxel's
    /// surroundings.
    ///
    /// A target in open space gets `replace_air`. A target in solid terrain
    /// is decided by its single neighbor toward the arena interior: open
    /// neighbor means the wall face is visible there, so `replace_air`;
    /// closed neighbor means the voxel is buried, so `replace_solid`.
    /// Exactly one write per call.
    fn place_wall_block(&mut self, target: BlockPos, side: WallSide) {
        let replacement = match self.open.classify(self.grid.block(target)) {
            Passability::Open => self.materials.open_replacement,
            Passability::Closed => {
                let (dx, dz) = side.interior_offset();
                let inner = target.offset(dx, 0, dz);
                match self.open.classify(self.grid.block(inner)) {
                    Passability::Open => self.materials.open_replacement,
                    Passability::Closed => self.materials.solid_replacement,
                }
            }
        };
        self.grid.set_block(target, replacement);
    }

    /// Square trace: the four straight edges at `center ± radius`.
    ///
    /// The corner columns lie on two edges and are written twice; the last
    /// write wins.
    fn build_square(&mut self, diameter: i32) {
        let radius = diameter.div_euclid(2);
        let x_inf = self.center.x - radius;
        let x_sup = self.center.x + radius;
        let z_inf = self.center.z - radius;
        let z_sup = self.center.z + radius;

        for x in x_inf..=x_sup {
            self.grid.set_block(BlockPos::new(x, FLOOR_Y, z_inf), FLOOR_MATERIAL);
            self.grid.set_block(BlockPos::new(x, FLOOR_Y, z_sup), FLOOR_MATERIAL);

            for y in FLOOR_Y + 1..=FLOOR_Y + self.height {
                self.place_wall_block(BlockPos::new(x, y, z_inf), WallSide::North);
                self.place_wall_block(BlockPos::new(x, y, z_sup), WallSide::South);
            }
        }

        for z in z_inf..=z_sup {
            self.grid.set_block(BlockPos::new(x_inf, FLOOR_Y, z), FLOOR_MATERIAL);
            self.grid.set_block(BlockPos::new(x_sup, FLOOR_Y, z), FLOOR_MATERIAL);

            for y in FLOOR_Y + 1..=FLOOR_Y + self.height {
                self.place_wall_block(BlockPos::new(x_inf, y, z), WallSide::West);
                self.place_wall_block(BlockPos::new(x_sup, y, z), WallSide::East);
            }
        }
    }

    /// Round trace: walk one quadrant, build four mirrored towers per point.
    fn build_round(&mut self, diameter: i32) {
        let radius = diameter.div_euclid(2);
        info!("round wall trace started: center {}, radius {radius}", self.center);

        for (x, z) in quadrant_arc(self.center, radius) {
            debug!("quadrant point ({x}, {z})");
            self.place_tower_ring(x, z, radius);
        }

        info!("round wall trace finished: center {}, radius {radius}", self.center);
    }

    /// Build the four towers at (x, z) and its reflections across
    /// x = center.x and z = center.z: a bedrock floor voxel each, then the
    /// selector up the column.
    fn place_tower_ring(&mut self, x: i32, z: i32, radius: i32) {
        let original = BlockPos::new(x, FLOOR_Y, z);
        let towers = [
            original,
            original.mirror_x(self.center.x),
            original.mirror_z(self.center.z),
            original.mirror_x(self.center.x).mirror_z(self.center.z),
        ];

        // The walked quadrant only covers the south-east arc, so each tower
        // faces either the south/north pair or the east/west pair.
        let sides = if z > radius {
            [WallSide::South, WallSide::South, WallSide::North, WallSide::North]
        } else {
            [WallSide::East, WallSide::West, WallSide::East, WallSide::West]
        };

        for tower in towers {
            self.grid.set_block(tower, FLOOR_MATERIAL);
        }

        for y in FLOOR_Y + 1..=FLOOR_Y + self.height {
            for (tower, side) in towers.into_iter().zip(sides) {
                self.place_wall_block(BlockPos::new(tower.x, y, tower.z), side);
            }
        }
    }
}

/// Walk the south-east quadrant of a circle of `radius` around `center`,
/// returning the traced (x, z) points in order.
///
/// Starts at (center.x + radius, center.z). Each step offers two candidate
/// points and keeps the one whose horizontal distance to the center is
/// nearest the radius; on a tie the first candidate wins. The current point
/// is emitted before the stop check, so the point at x = center.x is always
/// included and a zero radius yields exactly the center point.
///
/// x never increases, so the walk terminates: once the candidates leave the
/// ideal circle behind, the x-decrementing candidate is strictly nearer and
/// keeps being chosen until x reaches center.x.
pub fn quadrant_arc(center: BlockPos, radius: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let (mut x, mut z) = (center.x + radius, center.z);

    loop {
        points.push((x, z));

        if x == center.x {
            break;
        }

        // East part of the quadrant advances z and lets the decision rule
        // pull x down; the south part decrements x on every step.
        let (a, b) = if x > radius {
            ((x, z + 1), (x - 1, z + 1))
        } else {
            ((x - 1, z), (x - 1, z + 1))
        };

        (x, z) = if ring_error(b, center, radius) < ring_error(a, center, radius) {
            b
        } else {
            a
        };
    }

    points
}

/// How far the point is from the ideal circle, in the horizontal plane.
fn ring_error(point: (i32, i32), center: BlockPos, radius: i32) -> f64 {
    let pos = BlockPos::new(point.0, center.y, point.1);
    (pos.horizontal_distance(center) - f64::from(radius)).abs()
}
