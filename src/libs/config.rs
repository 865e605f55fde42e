//! Configuration management for tsurf.
//!
//! Settings live in `config.json` inside the application data directory.
//! A missing file is not an error: every section is optional and falls back
//! to defaults, so the tracker works with zero setup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsurf::libs::config::{Config, StorageBackend};
//!
//! let mut config = Config::read()?;
//! config.storage_mut().backend = StorageBackend::Sqlite;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Which [`crate::libs::store::DayStore`] implementation holds the records.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Single JSON file keyed by date.
    #[default]
    Json,
    /// SQLite database.
    Sqlite,
}

impl StorageBackend {
    pub const ALL: [StorageBackend; 2] = [StorageBackend::Json, StorageBackend::Sqlite];

    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Json => "json",
            StorageBackend::Sqlite => "sqlite",
        }
    }
}

/// Where and how day records are stored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Overrides the backend's default file in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

/// Root configuration object. Unconfigured sections are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Default location of the configuration file.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration, returning defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if there is one.
    pub fn delete() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Storage settings, defaulted when the section is missing.
    pub fn storage(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    pub fn storage_mut(&mut self) -> &mut StorageConfig {
        self.storage.get_or_insert_with(StorageConfig::default)
    }

    /// Interactive setup: asks for the storage backend and data file,
    /// pre-filled with the current values.
    pub fn init() -> Result<Self> {
        // A broken file should not block re-running setup
        let mut config = Self::read().unwrap_or_default();
        let current = config.storage();

        msg_print!(Message::ConfigModuleStorage);
        let names: Vec<&str> = StorageBackend::ALL.iter().map(StorageBackend::name).collect();
        let default_index = StorageBackend::ALL.iter().position(|b| *b == current.backend).unwrap_or(0);
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageBackend.to_string())
            .items(&names)
            .default(default_index)
            .interact()?;

        let data_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataFile.to_string())
            .default(current.data_file.map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        config.storage = Some(StorageConfig {
            backend: StorageBackend::ALL[selected],
            data_file: match data_file.trim() {
                "" => None,
                path => Some(PathBuf::from(path)),
            },
        });

        Ok(config)
    }
}
