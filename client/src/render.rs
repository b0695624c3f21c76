use xo_engine::{BOARD_SIDE, GameStatus, Mark, Player, TicTacToeGameState};

use crate::game_mode::GameMode;
use crate::score_board::ScoreBoard;
use crate::session::{COMPUTER_PLAYER, GameSession};

const ROW_SEPARATOR: &str = "---|---|---";

/// Draws the board; cells of a winning line are wrapped in brackets,
/// empty cells optionally show the number that selects them.
pub fn render_board(state: &TicTacToeGameState, show_cell_numbers: bool) -> String {
    let winner_line = state.winner_line();
    let cells = state.board().cells();

    let mut rows = Vec::with_capacity(BOARD_SIDE);
    for row in 0..BOARD_SIDE {
        let rendered: Vec<String> = (0..BOARD_SIDE)
            .map(|col| {
                let index = row * BOARD_SIDE + col;
                let symbol = match cells[index] {
                    Mark::X => 'X',
                    Mark::O => 'O',
                    Mark::Empty if show_cell_numbers => {
                        char::from_digit(index as u32 + 1, 10).unwrap_or(' ')
                    }
                    Mark::Empty => ' ',
                };
                if winner_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(rendered.join("|"));
    }

    let separator = format!("\n{}\n", ROW_SEPARATOR);
    rows.join(separator.as_str())
}

pub fn status_line(session: &GameSession) -> String {
    let state = session.state();
    match (session.mode(), state.status()) {
        (GameMode::TwoPlayers, GameStatus::InProgress) => {
            format!("Player {}'s turn", state.current_player())
        }
        (GameMode::VsComputer, GameStatus::InProgress) => {
            if state.current_player() == COMPUTER_PLAYER {
                "Bot is thinking...".to_string()
            } else {
                format!("Your turn ({})", state.current_player())
            }
        }
        (GameMode::TwoPlayers, GameStatus::Won { winner, .. }) => {
            format!("Player {} wins!", winner)
        }
        (GameMode::VsComputer, GameStatus::Won { winner, .. }) => {
            if winner == COMPUTER_PLAYER {
                "Bot wins!".to_string()
            } else {
                "You win!".to_string()
            }
        }
        (_, GameStatus::Draw) => "It's a draw!".to_string(),
    }
}

pub fn score_line(scores: &ScoreBoard) -> String {
    format!(
        "{}: {} | {}: {} | Draws: {}",
        Player::X,
        scores.x_wins,
        Player::O,
        scores.o_wins,
        scores.draws
    )
}
