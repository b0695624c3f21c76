use super::board::Board;
use super::error::{GameError, InvalidMoveReason};
use super::types::{CELL_COUNT, GameStatus, Mark, Player, WinningLine};
use super::win_detector::{check_win_with_line, has_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Sets up an arbitrary position with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Player) -> Result<Self, GameError> {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        if x_count.abs_diff(o_count) > 1 {
            return Err(GameError::InvalidBoard("mark counts differ by more than one"));
        }
        if has_line(&board, Player::X) && has_line(&board, Player::O) {
            return Err(GameError::InvalidBoard("both players have a complete line"));
        }

        let mut state = Self {
            board,
            current_player: to_move,
            status: GameStatus::InProgress,
            last_move: None,
        };
        state.check_game_over();
        Ok(state)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::InvalidMove {
                index,
                reason: InvalidMoveReason::GameOver,
            });
        }

        match self.board.get(index) {
            None => {
                return Err(GameError::InvalidMove {
                    index,
                    reason: InvalidMoveReason::OutOfRange,
                });
            }
            Some(Mark::Empty) => {}
            Some(_) => {
                return Err(GameError::InvalidMove {
                    index,
                    reason: InvalidMoveReason::Occupied,
                });
            }
        }

        self.board.set(index, self.current_player.into());
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.status)
    }

    fn check_game_over(&mut self) {
        if let Some((winner, line)) = check_win_with_line(&self.board) {
            self.status = GameStatus::Won { winner, line };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn available_cells(&self) -> Vec<usize> {
        self.board.available_cells()
    }

    pub fn winner_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        CELL_COUNT - self.board.count(Mark::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::WINNING_LINES;

    fn play(moves: &[usize]) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new();
        for &index in moves {
            state.apply_move(index).unwrap();
        }
        state
    }

    #[test]
    fn test_new_game_is_fresh() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.available_cells().len(), 9);
        assert_eq!(state.winner_line(), None);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_move_switches_turn() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.apply_move(4), Ok(GameStatus::InProgress));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().get(4), Some(Mark::X));
        assert_eq!(state.last_move(), Some(4));
        assert!(!state.available_cells().contains(&4));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut state = play(&[4]);
        let before = state.clone();
        assert_eq!(
            state.apply_move(4),
            Err(GameError::InvalidMove {
                index: 4,
                reason: InvalidMoveReason::Occupied
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_change() {
        let mut state = play(&[0, 1]);
        let before = state.clone();
        assert_eq!(
            state.apply_move(9),
            Err(GameError::InvalidMove {
                index: 9,
                reason: InvalidMoveReason::OutOfRange
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_diagonal_win_reports_line() {
        let mut state = TicTacToeGameState::new();
        state.apply_move(4).unwrap();
        state.apply_move(1).unwrap();
        state.apply_move(0).unwrap();
        state.apply_move(2).unwrap();
        let status = state.apply_move(8).unwrap();

        let expected_line = WinningLine::new([0, 4, 8]);
        assert_eq!(
            status,
            GameStatus::Won {
                winner: Player::X,
                line: expected_line
            }
        );
        assert_eq!(state.winner_line().map(|line| line.cells()), Some([0, 4, 8]));
        // winning player keeps the turn marker
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        let mut state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.status().winner(), Some(Player::X));
        let before = state.clone();
        assert_eq!(
            state.apply_move(8),
            Err(GameError::InvalidMove {
                index: 8,
                reason: InvalidMoveReason::GameOver
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_when_board_fills_without_line() {
        // X O X / X O O / O X X
        let mut state = play(&[0, 1, 2, 4, 3, 5, 7, 6]);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.apply_move(8), Ok(GameStatus::Draw));
        assert_eq!(state.winner_line(), None);
        assert_eq!(
            state.apply_move(0).unwrap_err(),
            GameError::InvalidMove {
                index: 0,
                reason: InvalidMoveReason::GameOver
            }
        );
    }

    #[test]
    fn test_from_board_detects_draw() {
        let board = Board::parse("XOXXOOOXX").unwrap();
        let state = TicTacToeGameState::from_board(board, Player::O).unwrap();
        assert_eq!(state.status(), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // O X X / O O X / X O _ , X completes column 2 and fills the board
        let board = Board::parse("OXXOOXXO.").unwrap();
        let mut state = TicTacToeGameState::from_board(board, Player::X).unwrap();
        let status = state.apply_move(8).unwrap();
        assert_eq!(status.winner(), Some(Player::X));
        assert!(state.board().is_full());
    }

    #[test]
    fn test_from_board_rejects_impossible_positions() {
        let board = Board::parse("XXX......").unwrap();
        assert!(TicTacToeGameState::from_board(board, Player::O).is_err());

        let board = Board::parse("XXXOOO...").unwrap();
        assert_eq!(
            TicTacToeGameState::from_board(board, Player::X),
            Err(GameError::InvalidBoard("both players have a complete line"))
        );
    }

    #[test]
    fn test_reset_from_any_state() {
        let games: [&[usize]; 4] = [&[], &[4, 0], &[0, 3, 1, 4, 2], &[0, 1, 2, 4, 3, 5, 7, 6, 8]];
        for moves in games {
            let mut state = play(moves);
            state.reset();
            assert_eq!(state, TicTacToeGameState::new());
            state.reset();
            assert_eq!(state, TicTacToeGameState::new());
        }
    }

    /// Walks every legal game and checks the board invariants at each node.
    #[test]
    fn test_invariants_hold_for_every_game() {
        fn walk(state: &TicTacToeGameState, games: &mut usize) {
            let x = state.board().count(Mark::X);
            let o = state.board().count(Mark::O);
            assert!(x == o || x == o + 1);

            match state.status() {
                GameStatus::Won { winner, line } => {
                    assert!(WINNING_LINES.contains(&line));
                    for index in line.cells() {
                        assert_eq!(state.board().get(index), Some(Mark::from(winner)));
                    }
                    *games += 1;
                    return;
                }
                GameStatus::Draw => {
                    assert!(state.board().is_full());
                    assert_eq!(check_win_with_line(state.board()), None);
                    *games += 1;
                    return;
                }
                GameStatus::InProgress => {
                    assert!(!state.board().is_full());
                }
            }

            for index in state.available_cells() {
                let mut next = state.clone();
                next.apply_move(index).unwrap();
                walk(&next, games);
            }
        }

        let mut games = 0;
        walk(&TicTacToeGameState::new(), &mut games);
        assert_eq!(games, 255_168);
    }
}
