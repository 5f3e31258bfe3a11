use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jumpchain::core::{BoardSnapshot, ChainPolicy, MoveGenerator, Owner};
use pprof::criterion::{Output, PProfProfiler};
use rand::prelude::*;

/// Boards where most squares hold a piece, so capture chains branch a lot
fn dense_positions(count: usize, size: usize) -> Vec<BoardSnapshot> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..count)
        .map(|_| {
            let mut board = BoardSnapshot::new(size).unwrap();
            for square in board.squares().collect::<Vec<_>>() {
                let owner = match rng.random_range(0..4) {
                    0 => Owner::PlayerA,
                    1 | 2 => Owner::PlayerB,
                    _ => Owner::Empty,
                };
                board.place(square, owner).unwrap();
            }
            board
        })
        .collect()
}

fn move_gen_benchmark(c: &mut Criterion) {
    let start = BoardSnapshot::start_position(8).unwrap();
    let dense = dense_positions(32, 10);

    for policy in [ChainPolicy::FirstMatch, ChainPolicy::OwnPath] {
        let generator = MoveGenerator::new(policy);

        c.bench_function(&format!("start_position_{:?}", policy), |b| {
            b.iter(|| {
                for player in Owner::players() {
                    black_box(generator.generate(black_box(&start), player));
                }
            })
        });

        c.bench_function(&format!("dense_10x10_{:?}", policy), |b| {
            b.iter(|| {
                for board in &dense {
                    black_box(generator.generate(black_box(board), Owner::PlayerA));
                }
            })
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = move_gen_benchmark
}
criterion_main!(benches);
