use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameConfig, GameSnapshot, GameState};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::PieceKind;

fn started() -> GameState {
    let mut state = GameState::new(GameConfig {
        seed: 12345,
        ..GameConfig::default()
    });
    state.start();
    state
}

fn bench_update(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("update_16ms", |b| {
        b.iter(|| {
            if !state.update(black_box(16.0)) {
                return;
            }
            if state.active().is_none() {
                state.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut state = started();
    state.move_piece(0, 4);
    let mut dx = 1;

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            if !state.move_piece(dx, 0) {
                dx = -dx;
            }
            state.rotate();
        })
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let mut state = started();
            while state.hard_drop().is_some() {}
            black_box(state.score())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = started();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_line_clear,
    bench_move_and_rotate,
    bench_hard_drop_game,
    bench_render
);
criterion_main!(benches);
