use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{GameState, Grid};
use tui_2048::types::Direction;

fn bench_shift(c: &mut Criterion) {
    let grid = Grid::from_rows([
        [2, 2, 4, 4],
        [0, 8, 0, 8],
        [2, 0, 2, 0],
        [16, 16, 16, 16],
    ]);

    c.bench_function("shift_left", |b| {
        b.iter(|| {
            let mut g = grid.clone();
            g.shift(black_box(Direction::Left))
        })
    });

    c.bench_function("shift_down", |b| {
        b.iter(|| {
            let mut g = grid.clone();
            g.shift(black_box(Direction::Down))
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut s = state.clone();
            s.spawn_tile()
        })
    });
}

fn bench_can_move(c: &mut Criterion) {
    // Worst case: full grid with the only merge in the last scanned corner.
    let mut state = GameState::new(1);
    state.set_grid(Grid::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 4],
    ]));

    c.bench_function("can_move_full_grid", |b| {
        b.iter(|| black_box(&state).can_move())
    });
}

criterion_group!(benches, bench_shift, bench_spawn, bench_can_move);
criterion_main!(benches);
