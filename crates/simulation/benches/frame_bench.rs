//! Full-frame benchmark: queue one tool switch and one apply, then run a
//! headless `App::update`.
//!
//! Run with: cargo bench -p simulation --bench frame_bench --features bench

use criterion::{criterion_group, criterion_main, Criterion};

use simulation::game_actions::GameAction;
use simulation::test_harness::TestCity;
use simulation::tools::BuildTool;

fn bench_frame(c: &mut Criterion) {
    let mut city = TestCity::new();
    let mut frame = 0i32;

    c.bench_function("frame_with_two_actions", |b| {
        b.iter(|| {
            let tool = if frame % 2 == 0 {
                BuildTool::Road
            } else {
                BuildTool::Erase
            };
            city.push(GameAction::SelectTool { tool })
                .push(GameAction::Apply {
                    row: frame % 15,
                    col: frame % 20,
                })
                .tick(1);
            frame = frame.wrapping_add(1);
        });
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
