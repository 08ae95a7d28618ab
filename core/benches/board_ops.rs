use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mineboard_core::{Board, BoardConfig};
use std::hint::black_box;

fn bench_reset(c: &mut Criterion) {
    for (name, config) in [
        ("beginner", BoardConfig::beginner()),
        ("intermediate", BoardConfig::intermediate()),
        ("dense_64", BoardConfig::new(64, 800).unwrap()),
    ] {
        c.bench_function(&format!("reset/{name}"), |b| {
            let mut board = Board::with_seed(config, 42);
            b.iter(|| {
                board.reset();
                black_box(board.state())
            })
        });
    }
}

fn bench_flood_fill(c: &mut Criterion) {
    // no mines: a single reveal opens the whole board
    for dimension in [16u8, 64, 255] {
        let config = BoardConfig::new(dimension, 0).unwrap();
        c.bench_function(&format!("flood_fill/open_{dimension}"), |b| {
            b.iter_batched(
                || Board::with_seed(config, 7),
                |mut board| black_box(board.reveal((dimension / 2, dimension / 2))),
                BatchSize::LargeInput,
            )
        });
    }
}

criterion_group!(benches, bench_reset, bench_flood_fill);
criterion_main!(benches);
