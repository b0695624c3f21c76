mod client_config;
mod config_content_provider;
mod config_error;
mod config_manager;
mod config_serializer;

pub use client_config::{CONFIG_FILE, Config, get_config_manager};
pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_error::ConfigError;
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
