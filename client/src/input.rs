use std::fmt;

use xo_engine::{BOARD_SIDE, CELL_COUNT, Difficulty, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Reset,
    SwitchMode,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    OutOfRange,
    Unknown(String),
    BadDifficulty(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Please enter a move"),
            InputError::OutOfRange => write!(
                f,
                "Row and column must be 1-{}, cell numbers 1-{}",
                BOARD_SIDE, CELL_COUNT
            ),
            InputError::Unknown(input) => write!(f, "Unknown command '{}', type 'help'", input),
            InputError::BadDifficulty(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for InputError {}

pub const HELP_TEXT: &str = "\
Moves:
  <row> <col>        row and column 1-3, e.g. '2 3'
  <cell>             cell number 1-9, counted left to right, top to bottom
Commands:
  r, reset           start a new game (scores are kept)
  m, mode            switch between two players and vs bot
  d, difficulty <t>  set bot difficulty: easy, medium or hard
  h, help            show this help
  q, quit            leave the game";

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let words: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .collect();

    let Some(first) = words.first() else {
        return Err(InputError::Empty);
    };

    match first.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "reset" | "new" => return Ok(Command::Reset),
        "m" | "mode" => return Ok(Command::SwitchMode),
        "h" | "help" | "?" => return Ok(Command::Help),
        "d" | "difficulty" => {
            let Some(tier) = words.get(1) else {
                return Err(InputError::BadDifficulty(
                    "Usage: difficulty <easy|medium|hard>".to_string(),
                ));
            };
            return tier
                .parse::<Difficulty>()
                .map(Command::SetDifficulty)
                .map_err(InputError::BadDifficulty);
        }
        _ => {}
    }

    let numbers: Result<Vec<usize>, _> = words.iter().map(|word| word.parse::<usize>()).collect();
    let Ok(numbers) = numbers else {
        return Err(InputError::Unknown(line.trim().to_string()));
    };

    match numbers.as_slice() {
        [cell] if (1..=CELL_COUNT).contains(cell) => Ok(Command::Place(cell - 1)),
        [row, col] if (1..=BOARD_SIDE).contains(row) && (1..=BOARD_SIDE).contains(col) => {
            Position::new(row - 1, col - 1)
                .to_index()
                .map(Command::Place)
                .ok_or(InputError::OutOfRange)
        }
        [_] | [_, _] => Err(InputError::OutOfRange),
        _ => Err(InputError::Unknown(line.trim().to_string())),
    }
}

/// Answer to "Play again?"; anything but y/yes counts as no.
pub fn parse_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
