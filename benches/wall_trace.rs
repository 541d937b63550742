// Benchmarks for the boundary traces.
//
// The quadrant walk is the only iterative piece of the generator; the full
// builds measure it together with the selector's grid reads and writes.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use arena_wall::border::{BorderShape, BorderState};
use arena_wall::config::WallConfig;
use arena_wall::material::Material;
use arena_wall::types::BlockPos;
use arena_wall::wall::{WallBuilder, quadrant_arc};
use arena_wall::world::BlockWorld;

fn bench_quadrant_arc(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadrant_arc");
    for radius in [64, 256, 1024] {
        group.bench_function(format!("radius_{radius}"), |b| {
            let center = BlockPos::new(0, 64, 0);
            b.iter(|| quadrant_arc(black_box(center), black_box(radius)));
        });
    }
    group.finish();
}

fn bench_full_build(c: &mut Criterion) {
    let config = WallConfig {
        wall_height: 16,
        replace_air: "GLASS".to_string(),
        replace_solid: "SMOOTH_BRICK".to_string(),
        open_materials: None,
    };
    let center = BlockPos::new(160, 0, 160);

    let mut terrain = BlockWorld::new(320, 32, 320);
    terrain.fill_box(BlockPos::new(0, 0, 0), BlockPos::new(319, 7, 319), Material::Stone);

    let mut group = c.benchmark_group("build");
    group.bench_function("square_d200_h16", |b| {
        b.iter_batched(
            || terrain.clone(),
            |mut world| {
                let border = BorderState::new(BorderShape::Square, 200);
                assert!(WallBuilder::new(&config).build(&mut world, center, &border));
                world
            },
            criterion::BatchSize::LargeInput,
        );
    });
    group.bench_function("round_d200_h16", |b| {
        b.iter_batched(
            || terrain.clone(),
            |mut world| {
                let border = BorderState::new(BorderShape::Round, 200);
                assert!(WallBuilder::new(&config).build(&mut world, center, &border));
                world
            },
            criterion::BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_quadrant_arc, bench_full_build);
criterion_main!(benches);
