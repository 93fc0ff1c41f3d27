//! Configuration error types.

use std::fmt;
use std::path::{Path, PathBuf};

use derive_more::Error;
use tracing::instrument;

/// Configuration error with location tracking.
#[derive(Debug, Clone, Error)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Settings file being read, when the error came from one.
    pub path: Option<PathBuf>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Attaches the settings file the error belongs to.
    pub fn with_path(self, path: &Path) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            ..self
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config error")?;
        if let Some(path) = &self.path {
            write!(f, " in {}", path.display())?;
        }
        write!(f, ": {} at {}:{}", self.message, self.file, self.line)
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("TOML error: {}", err))
    }
}
