use super::board::Board;
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use crate::session_rng::SessionRng;
use super::types::{Difficulty, GameStatus, Mark, Player};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_player: state.current_player(),
        }
    }
}

/// Picks a cell for the side to move. Fails with `NoMovesAvailable` on a
/// finished game; callers are expected to check the status first.
pub fn calculate_move(
    difficulty: Difficulty,
    state: &TicTacToeGameState,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    if state.is_over() {
        return Err(GameError::NoMovesAvailable);
    }

    let input = BotInput::from_game_state(state);
    let choice = match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                calculate_minimax_move(&input)
            } else {
                calculate_random_move(&input, rng)
            }
        }
        Difficulty::Hard => calculate_minimax_move(&input),
    };

    choice.ok_or(GameError::NoMovesAvailable)
}

/// Selects a move for the side to move and applies it to `state`.
pub fn play_computer_move(
    state: &mut TicTacToeGameState,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<(usize, GameStatus), GameError> {
    let index = calculate_move(difficulty, state, rng)?;
    let status = state.apply_move(index)?;
    Ok((index, status))
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    rng.pick(&input.board.available_cells())
}

/// Full-depth search. Among equally scored moves the lowest cell index
/// wins, so the result is deterministic for a given position.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    if check_win(&input.board).is_some() {
        return None;
    }

    let bot = input.current_player;
    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in input.board.available_cells() {
        board.set(index, bot.into());
        let score = minimax(&mut board, 0, bot.opponent(), bot, best_score, i32::MAX);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Exact minimax value of `board` for `bot`, with `to_move` on turn and
/// `depth` plies already played below the root.
pub fn minimax_score(board: &Board, depth: i32, to_move: Player, bot: Player) -> i32 {
    let mut scratch = *board;
    minimax(&mut scratch, depth, to_move, bot, i32::MIN, i32::MAX)
}

fn minimax(
    board: &mut Board,
    depth: i32,
    to_move: Player,
    bot: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if board.is_full() {
        return 0;
    }

    let mark = Mark::from(to_move);

    if to_move == bot {
        let mut max_eval = i32::MIN;
        for index in board.available_cells() {
            board.set(index, mark);
            let eval = minimax(board, depth + 1, to_move.opponent(), bot, alpha, beta);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.available_cells() {
            board.set(index, mark);
            let eval = minimax(board, depth + 1, to_move.opponent(), bot, alpha, beta);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
