use std::fmt;

use xo_engine::{
    Difficulty, GameError, GameStatus, Player, SessionRng, TicTacToeGameState, log,
    play_computer_move,
};

use crate::game_mode::GameMode;
use crate::score_board::ScoreBoard;

pub const COMPUTER_PLAYER: Player = Player::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Game(GameError),
    NotHumanTurn,
    NotComputerTurn,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Game(e) => write!(f, "{}", e),
            SessionError::NotHumanTurn => write!(f, "Wait for the bot to move"),
            SessionError::NotComputerTurn => write!(f, "It is not the bot's turn"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<GameError> for SessionError {
    fn from(e: GameError) -> Self {
        SessionError::Game(e)
    }
}

/// One table: the current game plus the running tally across games.
pub struct GameSession {
    state: TicTacToeGameState,
    scores: ScoreBoard,
    mode: GameMode,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty, rng: SessionRng) -> Self {
        log!(
            "Session started: mode={}, difficulty={}, seed={}",
            mode,
            difficulty,
            rng.seed()
        );
        Self {
            state: TicTacToeGameState::new(),
            scores: ScoreBoard::default(),
            mode,
            difficulty,
            rng,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && !self.state.is_over()
            && self.state.current_player() == COMPUTER_PLAYER
    }

    pub fn human_move(&mut self, index: usize) -> Result<GameStatus, SessionError> {
        if self.is_computer_turn() {
            return Err(SessionError::NotHumanTurn);
        }
        let player = self.state.current_player();
        let status = self.state.apply_move(index)?;
        log!("Player {} took cell {}", player, index);
        self.record(status);
        Ok(status)
    }

    pub fn computer_move(&mut self) -> Result<(usize, GameStatus), SessionError> {
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let (index, status) = play_computer_move(&mut self.state, self.difficulty, &mut self.rng)?;
        log!("Bot ({}) took cell {}", self.difficulty, index);
        self.record(status);
        Ok((index, status))
    }

    /// Clears the board and keeps the tally.
    pub fn new_game(&mut self) {
        self.state.reset();
        log!("New game");
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        log!("Mode switched to {}", mode);
        self.new_game();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        log!("Difficulty set to {}", difficulty);
    }

    fn record(&mut self, status: GameStatus) {
        if self.scores.record(&status) {
            log!(
                "Game over: {:?}, scores X={} O={} draws={}",
                status,
                self.scores.x_wins,
                self.scores.o_wins,
                self.scores.draws
            );
        }
    }
}
