use serde::{Deserialize, Serialize};
use xo_engine::Difficulty;

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::game_mode::GameMode;

pub const CONFIG_FILE: &str = "xo_client_config.yaml";

const MAX_BOT_DELAY_MS: u64 = 5000;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Pause before the computer's move is shown.
    pub bot_delay_ms: u64,
    pub show_cell_numbers: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            difficulty: Difficulty::Medium,
            bot_delay_ms: 500,
            show_cell_numbers: true,
        }
    }
}
