//! services/tui/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
    #[error("Could not determine a data directory; set TOOLDEX_DATA_DIR")]
    NoDataDir,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding the per-user favorites files and the log file.
    pub data_dir: PathBuf,
    /// Optional path to a seed dataset overriding the embedded default.
    pub seed_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let data_dir = match std::env::var("TOOLDEX_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .map(|d| d.join("tooldex"))
                .ok_or(ConfigError::NoDataDir)?,
        };

        let seed_path = std::env::var("TOOLDEX_SEED").map(PathBuf::from).ok();

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            data_dir,
            seed_path,
            log_level,
        })
    }

    /// The log file lives next to the favorites files; the terminal itself
    /// belongs to the TUI.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("tooldex.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_is_under_the_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/tooldex-test"),
            seed_path: None,
            log_level: Level::INFO,
        };
        assert_eq!(config.log_path(), PathBuf::from("/tmp/tooldex-test/tooldex.log"));
    }
}
