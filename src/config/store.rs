//! Persistent settings store
//!
//! Settings live in a single pretty-printed JSON file in the user's home
//! directory. The file is rewritten wholesale by setup and never touched by
//! any other action.

use super::Settings;
use crate::error::{IoResultExt, Result, VideoToolsError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV: &str = "VIDEO_TOOLS_SETTINGS";

/// File name of the settings file inside the home directory
pub const SETTINGS_FILE_NAME: &str = ".video-tools";

/// Loads and saves [`Settings`] at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user location.
    ///
    /// `$VIDEO_TOOLS_SETTINGS` wins, otherwise `~/.video-tools`.
    pub fn locate() -> Result<Self> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|p| !p.is_empty()) {
            return Ok(Self::at(path));
        }

        let base = BaseDirs::new()
            .ok_or_else(|| VideoToolsError::config("Could not determine the home directory"))?;
        Ok(Self::at(base.home_dir().join(SETTINGS_FILE_NAME)))
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, or first-run settings if the file does not exist
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!("No settings at {:?}, starting fresh", self.path);
            return Ok(Settings::fresh());
        }

        let json = std::fs::read_to_string(&self.path).with_path(&self.path)?;
        let settings = serde_json::from_str(&json).map_err(|source| VideoToolsError::SettingsParse {
            path: self.path.clone(),
            source,
        })?;

        debug!("Loaded settings from {:?}", self.path);
        Ok(settings)
    }

    /// Overwrite the settings file
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent)?;
        }

        let json = settings.to_pretty_json()?;
        std::fs::write(&self.path, json).with_path(&self.path)?;

        info!("Wrote settings to {:?}", self.path);
        Ok(())
    }
}
