use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termtris::core::{base_shape, Board, GameEngine};
use termtris::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    c.bench_function("engine_tick", |b| {
        let mut engine = GameEngine::new(12345);
        b.iter(|| {
            engine.on_tick();
        })
    });
}

fn bench_clear_lines(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            board.clear_full_lines()
        })
    });
}

fn bench_is_valid_move(c: &mut Criterion) {
    let board = Board::new();
    let shape = base_shape(PieceKind::T);

    c.bench_function("is_valid_move", |b| {
        b.iter(|| board.is_valid_move(black_box(4), black_box(10), &shape))
    });
}

fn bench_rotation(c: &mut Criterion) {
    let shape = base_shape(PieceKind::J);

    c.bench_function("shape_rotation", |b| b.iter(|| black_box(&shape).rotated()))
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_lines,
    bench_is_valid_move,
    bench_rotation
);
criterion_main!(benches);
