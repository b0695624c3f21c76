use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use xo_engine::log;

use crate::game_mode::GameMode;
use crate::input::{Command, HELP_TEXT, parse_command, parse_yes};
use crate::render::{render_board, score_line, status_line};
use crate::session::GameSession;

const BANNER: &str = "\
========================================
             TIC TAC TOE
========================================";

/// Line-oriented terminal front end. Reads commands from `input` and
/// draws to `output` until the player quits or input ends.
pub struct App<R, W> {
    session: GameSession,
    input: R,
    output: W,
    bot_delay: Duration,
    show_cell_numbers: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        session: GameSession,
        input: R,
        output: W,
        bot_delay: Duration,
        show_cell_numbers: bool,
    ) -> Self {
        Self {
            session,
            input,
            output,
            bot_delay,
            show_cell_numbers,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        writeln!(self.output, "{}", BANNER)?;
        self.print_mode()?;

        loop {
            self.draw()?;

            if self.session.state().is_over() {
                if !self.ask_play_again()? {
                    break;
                }
                self.session.new_game();
                continue;
            }

            if self.session.is_computer_turn() {
                if !self.bot_delay.is_zero() {
                    thread::sleep(self.bot_delay);
                }
                let (index, _) = self.session.computer_move()?;
                writeln!(self.output, "Bot plays cell {}", index + 1)?;
                continue;
            }

            let Some(line) = self.prompt("> ")? else {
                break;
            };

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        let scores = self.session.scores();
        writeln!(self.output, "Games played: {}", scores.games_played())?;
        writeln!(self.output, "Final scores - {}", score_line(scores))?;
        writeln!(self.output, "Thanks for playing!")?;
        Ok(())
    }

    fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Place(index) => {
                if let Err(e) = self.session.human_move(index) {
                    log!("Rejected move {}: {}", index, e);
                    writeln!(self.output, "Invalid move! {}", e)?;
                }
            }
            Command::Reset => self.session.new_game(),
            Command::SwitchMode => {
                let mode = self.session.mode().toggled();
                self.session.set_mode(mode);
                self.print_mode()?;
            }
            Command::SetDifficulty(difficulty) => {
                self.session.set_difficulty(difficulty);
                writeln!(self.output, "Bot difficulty: {}", difficulty)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        let board = render_board(self.session.state(), self.show_cell_numbers);
        writeln!(self.output)?;
        writeln!(self.output, "{}", board)?;
        writeln!(self.output)?;
        writeln!(self.output, "Scores - {}", score_line(self.session.scores()))?;
        writeln!(self.output, "{}", status_line(&self.session))
    }

    fn print_mode(&mut self) -> io::Result<()> {
        writeln!(self.output, "Mode: {}", self.session.mode())?;
        if self.session.mode() == GameMode::VsComputer {
            writeln!(self.output, "Bot difficulty: {}", self.session.difficulty())?;
        }
        Ok(())
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        let answer = self.prompt("Play again? (Y/N): ")?;
        Ok(answer.is_some_and(|line| parse_yes(&line)))
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
