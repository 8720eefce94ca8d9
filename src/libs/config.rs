//! Configuration management for the glix application.
//!
//! Handles loading, saving and interactively creating the application
//! configuration. Settings are stored as pretty-printed JSON in the
//! platform-specific application data directory resolved by
//! [`DataStorage`], so the tool can be run from any working directory.
//!
//! ## Configuration Structure
//!
//! The configuration is modular: each external integration owns its own
//! section and is optional. Today the only module is GitLab; the
//! [`ConfigModule`] indirection keeps the interactive wizard extensible
//! should more sources be added.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use glix::libs::config::Config;
//!
//! // Load existing configuration or fall back to an empty default
//! let config = Config::read().unwrap_or_default();
//!
//! if let Some(gitlab) = &config.gitlab {
//!     println!("GitLab URL: {}", gitlab.api_url);
//! }
//! ```

use super::data_storage::DataStorage;
use crate::api::gitlab::GitLabConfig;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive setup to present the available integrations.
/// Each module has a unique key for routing and a display name.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Main configuration container for the application.
///
/// Unconfigured modules are omitted from the JSON output via
/// `skip_serializing_if`, keeping the file minimal.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// GitLab API integration configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<GitLabConfig>,
}

impl Config {
    /// Reads the configuration from the filesystem.
    ///
    /// A missing file is not an error: it yields the default (empty)
    /// configuration so first runs work without setup. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, creating the data
    /// directory if needed and overwriting any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if one exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Starts from the existing configuration (so values can be updated
    /// selectively), presents the available modules, and runs each
    /// selected module's own setup prompts. The result still has to be
    /// persisted with [`Config::save`].
    pub fn init() -> Result<Config> {
        let mut config = Config::read().unwrap_or_default();

        let modules = vec![GitLabConfig::module()];
        let module_names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();

        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select the modules to configure (space to toggle, enter to confirm)")
            .items(&module_names)
            .interact()?;

        for index in selection {
            if modules[index].key == "gitlab" {
                config.gitlab = Some(GitLabConfig::init(&config.gitlab)?);
            }
        }

        Ok(config)
    }
}
