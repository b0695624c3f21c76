use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use xo_engine::{
    Board, BotInput, Difficulty, Player, SessionRng, TicTacToeGameState, calculate_minimax_move,
    play_computer_move,
};

fn bench_minimax_full_game() {
    let mut state = TicTacToeGameState::new();
    let mut session_rng = SessionRng::new(0);
    while !state.is_over() {
        if play_computer_move(&mut state, Difficulty::Hard, &mut session_rng).is_err() {
            break;
        }
    }
}

fn bench_minimax_single_move_empty_board() {
    let input = BotInput {
        board: Board::new(),
        current_player: Player::X,
    };
    black_box(calculate_minimax_move(&input));
}

fn bench_minimax_single_move_mid_game() -> Option<usize> {
    let board = Board::parse("X...O...X").ok()?;
    let input = BotInput {
        board,
        current_player: Player::O,
    };
    black_box(calculate_minimax_move(&input))
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("full_game", |b| {
        b.iter(bench_minimax_full_game)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
