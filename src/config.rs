//! Configuration loading and management
//!
//! Handles parsing of the optional `config.toml` in the platform config
//! directory and resolution of the data file location. Precedence for the
//! data file: `--data-file` flag (or `TODO_DATA_FILE`), then the config
//! file, then the default `data/todos.json` in the current directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default data file location, relative to the current directory
pub const DEFAULT_DATA_FILE: &str = "data/todos.json";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data file location override
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the platform config directory, if present
    pub fn load() -> Result<Self> {
        match config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path; a missing file yields the
    /// default configuration
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the data file to use for this invocation
    pub fn resolve_data_file(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

/// Path to the config file in the platform config directory
pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "todo").map(|dirs| dirs.config_dir().join("config.toml"))
}
