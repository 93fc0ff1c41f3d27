//! Runtime settings: an optional TOML file overridden by command-line flags.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::cli::Cli;
use crate::games::tictactoe::SortOrder;

/// Default log file, written next to where the game is started.
pub const DEFAULT_LOG_FILE: &str = "tictactoe_replay.log";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Resolved settings for a run.
///
/// ```toml
/// log_file = "game.log"
/// log_filter = "tictactoe_replay=debug"
/// descending = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    log_file: PathBuf,
    log_filter: String,
    descending: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            descending: false,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text; missing keys take their defaults.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads settings from a TOML file.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Cannot read file: {}", e)).with_path(path))?;
        let settings = Self::from_toml_str(&text).map_err(|e| e.with_path(path))?;
        debug!(?settings, "Loaded settings file");
        Ok(settings)
    }

    /// Combines the settings file named on the command line (if any) with
    /// the flags that override it.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }
        if cli.descending {
            settings.descending = true;
        }
        Ok(settings)
    }

    /// Initial order of the move list.
    pub fn sort_order(&self) -> SortOrder {
        if self.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}
