use xo_engine::{GameStatus, Player};

/// Results of the games played in this process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    /// Tallies a terminal status; returns false for `InProgress`.
    pub fn record(&mut self, status: &GameStatus) -> bool {
        match status {
            GameStatus::Won { winner: Player::X, .. } => self.x_wins += 1,
            GameStatus::Won { winner: Player::O, .. } => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return false,
        }
        true
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
