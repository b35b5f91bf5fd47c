//! Error types for Video Tools
//!
//! Every fallible operation in the crate returns [`Result`]. I/O failures carry
//! the path they happened at so the message printed by `main` is actionable.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Video Tools operations
#[derive(Error, Debug)]
pub enum VideoToolsError {
    /// I/O error during file operations
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but is not valid JSON
    #[error("Malformed settings file '{path}': {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A setting holds the wrong kind of value
    #[error("Setting '{key}' must be {expected}")]
    InvalidSetting { key: String, expected: &'static str },

    /// A setting required by the current action is absent
    #[error("Missing setting '{0}'")]
    MissingSetting(String),

    /// Reading from or writing to the terminal failed
    #[error("Prompt I/O failed: {0}")]
    Prompt(#[source] std::io::Error),
}

impl VideoToolsError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an invalid setting error
    pub fn invalid_setting(key: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            expected,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::SettingsParse { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for Video Tools operations
pub type Result<T> = std::result::Result<T, VideoToolsError>;

impl From<std::io::Error> for VideoToolsError {
    fn from(err: std::io::Error) -> Self {
        VideoToolsError::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| VideoToolsError::io(path, e))
    }
}
