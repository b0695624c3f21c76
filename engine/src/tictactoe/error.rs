use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied,
    GameOver,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange => write!(f, "position out of bounds"),
            InvalidMoveReason::Occupied => write!(f, "cell is already marked"),
            InvalidMoveReason::GameOver => write!(f, "game is already over"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    InvalidMove {
        index: usize,
        reason: InvalidMoveReason,
    },
    /// The move selector was asked to play on a finished or full board.
    NoMovesAvailable,
    InvalidBoard(&'static str),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove { index, reason } => {
                write!(f, "Invalid move at cell {}: {}", index, reason)
            }
            GameError::NoMovesAvailable => write!(f, "No moves available"),
            GameError::InvalidBoard(reason) => write!(f, "Invalid board: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}
