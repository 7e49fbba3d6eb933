use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{apply_move, is_terminal, GameState, Grid};
use tui_2048::types::Direction;

fn mid_game_grid() -> Grid {
    Grid::from_rows([
        [2, 4, 2, 0],
        [16, 8, 4, 2],
        [64, 32, 8, 0],
        [128, 4, 2, 2],
    ])
    .unwrap()
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = mid_game_grid();

    c.bench_function("apply_move_all_directions", |b| {
        b.iter(|| {
            for direction in Direction::all() {
                black_box(apply_move(black_box(&grid), direction));
            }
        })
    });
}

fn bench_is_terminal(c: &mut Criterion) {
    let grid = mid_game_grid();

    c.bench_function("is_terminal", |b| b.iter(|| is_terminal(black_box(&grid))));
}

fn bench_full_episode(c: &mut Criterion) {
    c.bench_function("episode_200_moves", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(12345));
            for _ in 0..200 {
                if state.game_over() {
                    break;
                }
                for direction in Direction::all() {
                    if state.apply_direction(direction) {
                        break;
                    }
                }
            }
            black_box(state.score())
        })
    });
}

criterion_group!(benches, bench_apply_move, bench_is_terminal, bench_full_episode);
criterion_main!(benches);
