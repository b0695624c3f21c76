mod app;
mod config;
mod game_mode;
mod input;
mod render;
mod score_board;
mod session;

use std::io;
use std::time::Duration;

use clap::Parser;
use xo_engine::{Difficulty, SessionRng, log, logger};

use app::App;
use config::{CONFIG_FILE, get_config_manager};
use game_mode::GameMode;
use session::GameSession;

#[derive(Parser)]
#[command(name = "xo", about = "Tic-tac-toe for two players or against the computer")]
struct Args {
    /// Overrides the mode stored in the config file.
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Bot difficulty: easy, medium or hard.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the bot's random choices.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Writes the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        config.bot_delay_ms = bot_delay_ms;
    }
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", args.config);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let session = GameSession::new(config.mode, config.difficulty, rng);
    let stdin = io::stdin();
    let mut app = App::new(
        session,
        stdin.lock(),
        io::stdout(),
        Duration::from_millis(config.bot_delay_ms),
        config.show_cell_numbers,
    );
    app.run()
}
