//! Board Benchmarks
//!
//! Legal-destination recompute dominates every mutation, so these measure
//! it directly and through moves, undo and redo.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use variant_chess::{Board, BoardConfig, SetupMode};

fn bench_new_board(c: &mut Criterion) {
    c.bench_function("new_standard_board", |b| {
        b.iter(|| black_box(Board::new(SetupMode::Standard)))
    });
}

fn bench_recompute_starting(c: &mut Criterion) {
    let mut board = Board::new(SetupMode::Custom);

    c.bench_function("recompute_custom_starting_position", |b| {
        b.iter(|| {
            board.recompute_legal_destinations();
            black_box(board.is_check())
        })
    });
}

fn bench_recompute_large_board(c: &mut Criterion) {
    let config = BoardConfig::new(16, 16, SetupMode::Standard);
    let Ok(mut board) = Board::from_config(&config) else {
        return;
    };

    c.bench_function("recompute_16x16_starting_position", |b| {
        b.iter(|| {
            board.recompute_legal_destinations();
            black_box(board.is_end_game())
        })
    });
}

fn bench_move_undo_redo(c: &mut Criterion) {
    let mut board = Board::new(SetupMode::Standard);

    c.bench_function("move_undo_redo_cycle", |b| {
        b.iter(|| {
            board.attempt_move(1, 4, 3, 4);
            board.undo_movement();
            board.redo_movement();
            black_box(board.undo_movement())
        })
    });
}

criterion_group!(
    benches,
    bench_new_board,
    bench_recompute_starting,
    bench_recompute_large_board,
    bench_move_undo_redo,
);
criterion_main!(benches);
