// arena_wall: boundary wall generator for voxel arena worlds.
//
// Generates the impassable wall that encloses the playable region of a
// match: square or round, floor to configured height, built from two
// materials chosen per voxel so the wall blends into the surrounding
// terrain. Pure library, no I/O; the host server supplies grid access,
// configuration, and border state, and initializes the `log` backend.
//
// Module overview:
// - `wall.rs`:     The core. Material selector, square trace, round
//                  quadrant trace with mirroring, `WallBuilder` entry point.
// - `material.rs`: Material catalog, name resolution, open/closed classifier
//                  with an injectable open-material set.
// - `world.rs`:    `BlockAccess` grid seam + dense `BlockWorld` grid.
// - `config.rs`:   `WallConfig`, loaded from JSON.
// - `border.rs`:   `BorderState`, the shape flag and diameter read per build.
// - `types.rs`:    `BlockPos`, `WallSide`, `Passability`.
//
// A build runs synchronously to completion on the caller's thread and
// assumes exclusive write access to the touched region. There is no partial
// progress checkpoint: interrupting the process mid-build leaves an
// incomplete boundary.

pub mod border;
pub mod config;
pub mod material;
pub mod types;
pub mod wall;
pub mod world;
