//! Application configuration.
//!
//! # Responsibility
//! - Load user configuration from a JSON file with per-key defaults.
//! - Resolve relative paths against a base directory before use.
//!
//! # Invariants
//! - A missing config file yields `AppConfig::default()`.
//! - `log_level` is always a canonical level after `load`.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_ADDRESS_BOOK_FILE: &str = "data/addressbook.json";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Configuration load failure.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    InvalidLogLevel(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read config `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "malformed config `{}`: {source}", path.display())
            }
            Self::InvalidLogLevel(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidLogLevel(err) => Some(err),
        }
    }
}

/// User-tunable settings. Every key is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
    pub address_book_file_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE),
        }
    }
}

impl AppConfig {
    /// Reads config from `path`, falling back to defaults when absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let level = config.log_level.clone();
        config.set_log_level(&level)?;
        Ok(config)
    }

    /// Replaces the log level after normalizing it.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        let normalized = normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        self.log_level = normalized.to_string();
        Ok(())
    }

    /// Returns a copy with relative paths joined onto `base`.
    pub fn resolved_against(&self, base: &Path) -> Self {
        Self {
            log_level: self.log_level.clone(),
            log_dir: absolutize(base, &self.log_dir),
            address_book_file_path: absolutize(base, &self.address_book_file_path),
        }
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
