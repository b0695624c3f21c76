mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, calculate_minimax_move, calculate_move, calculate_random_move, minimax_score,
    play_computer_move,
};
pub use error::{GameError, InvalidMoveReason};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIDE, CELL_COUNT, Difficulty, GameStatus, Mark, Player, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
