use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    TwoPlayers,
    /// Human plays X and moves first, the computer answers as O.
    VsComputer,
}

impl GameMode {
    pub fn toggled(&self) -> GameMode {
        match self {
            GameMode::TwoPlayers => GameMode::VsComputer,
            GameMode::VsComputer => GameMode::TwoPlayers,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoPlayers => write!(f, "two players"),
            GameMode::VsComputer => write!(f, "single player (vs bot)"),
        }
    }
}
