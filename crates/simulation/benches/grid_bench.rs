//! Criterion benchmarks for the city state.
//!
//! Benchmarks:
//!   - place + erase round trip on one cell
//!   - out-of-bounds apply (early reject)
//!   - pixel_to_cell coordinate conversion
//!   - snapshot of a fully built grid
//!
//! Run with: cargo bench -p simulation --bench grid_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simulation::city_state::CityGridState;
use simulation::grid::TileGrid;
use simulation::tools::BuildTool;

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("city_apply");
    group.sample_size(1000);

    group.bench_function("place_erase_round_trip", |b| {
        let mut state = CityGridState::default();
        b.iter(|| {
            state.select_tool(BuildTool::House);
            black_box(state.apply(black_box(7), black_box(9)));
            state.select_tool(BuildTool::Erase);
            black_box(state.apply(black_box(7), black_box(9)));
        });
    });

    group.bench_function("out_of_bounds", |b| {
        let mut state = CityGridState::default();
        b.iter(|| black_box(state.apply(black_box(18), black_box(24))));
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("city_queries");

    group.bench_function("pixel_to_cell", |b| {
        b.iter(|| black_box(TileGrid::pixel_to_cell(black_box(433.5), black_box(271.2))));
    });

    let mut full = CityGridState::new(20, 15, i64::MAX);
    for row in 0..15 {
        for col in 0..20 {
            full.apply(row, col);
        }
    }
    group.bench_function("snapshot_full_grid", |b| {
        b.iter(|| black_box(full.snapshot()));
    });

    group.finish();
}

criterion_group!(benches, bench_apply, bench_queries);
criterion_main!(benches);
