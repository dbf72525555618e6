//! Configuration management for the taskdeck application.
//!
//! Settings live in a JSON file inside the platform-specific application
//! data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\taskdeck\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/taskdeck/config.json`
//! - **Linux**: `~/.local/share/lacodda/taskdeck/config.json`
//!
//! The only setting today is the default acting user, consulted when neither
//! a `--user` argument nor the `TASKDECK_USER` environment variable is
//! present. A missing file yields the default configuration; a corrupted
//! file is a parse error.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Default user identity for operations run without an explicit user.
    pub user: Option<String>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(config_file_path, serde_json::to_string_pretty(self)?)?;
        msg_success!(Message::ConfigSaved);
        Ok(())
    }

    /// Interactive setup: prompts for the default user, starting from the
    /// current value when one is configured.
    pub fn init() -> Result<Self> {
        let current = Config::read().unwrap_or_default();

        let user: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultUser.to_string())
            .default(current.user.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            user: if user.trim().is_empty() { None } else { Some(user.trim().to_string()) },
        })
    }
}
