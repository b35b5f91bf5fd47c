//! Settings for Video Tools
//!
//! Settings are a flat map from string keys to strings, booleans, or lists
//! of strings. This keeps the persisted file and the command-line overlay
//! simple; the typed [`IngestConfig`] is extracted from the map right before
//! an ingest runs.

use crate::error::{Result, VideoToolsError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Well-known settings keys
pub mod keys {
    /// Version of the tool that wrote the settings
    pub const VERSION: &str = "video-tools-version";
    /// Action to perform (`setup` or `ingest`)
    pub const ACTION: &str = "action";
    /// Operating system type
    pub const OS: &str = "os";
    /// Directory that holds all mounted volumes
    pub const VOLUMES_BASE: &str = "volumes-base";
    /// Volume that holds the projects
    pub const WORK_VOLUME: &str = "work-volume";
    /// Card or device volume names to ingest from
    pub const SOURCE_VOLUMES: &str = "source-volumes";
    /// File extensions to ingest
    pub const EXTENSIONS: &str = "extensions";
    /// Project name
    pub const PROJECT: &str = "project";
    /// Hide the progress spinner
    pub const QUIET: &str = "quiet";

    /// Keys the setup wizard writes
    pub const MANAGED: [&str; 5] = [OS, VOLUMES_BASE, WORK_VOLUME, SOURCE_VOLUMES, EXTENSIONS];
}

/// Default operating system type
pub const DEFAULT_OS: OsType = OsType::Mac;

/// Default volumes base path
pub const DEFAULT_VOLUMES_BASE: &str = "/Volumes";

/// Default work volume name
pub const DEFAULT_WORK_VOLUME: &str = "video-disk";

/// Default source volume names (camera card labels)
pub const DEFAULT_SOURCE_VOLUMES: [&str; 3] = ["EOS_DIGITAL", "CANON", "BLACKMAGIC"];

/// Default media extensions
pub const DEFAULT_EXTENSIONS: [&str; 10] = [
    "MOV", "mov", "MP4", "mp4", "MTS", "mts", "M4V", "m4v", "mlv", "MLV",
];

/// Built-in source volume list
pub fn default_source_volumes() -> Vec<String> {
    DEFAULT_SOURCE_VOLUMES.iter().map(|s| s.to_string()).collect()
}

/// Built-in extension list
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

/// A single settings value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean flag
    Bool(bool),
    /// Free text
    Text(String),
    /// Ordered list of strings
    List(Vec<String>),
}

impl SettingValue {
    /// Text value, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret as a list.
    ///
    /// Text is split on commas so `extensions=MOV,MP4` works from the command line.
    pub fn to_list(&self) -> Option<Vec<String>> {
        match self {
            Self::List(items) => Some(items.clone()),
            Self::Text(s) => Some(
                s.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            Self::Bool(_) => None,
        }
    }

    /// Interpret as a flag
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => matches!(s.to_lowercase().as_str(), "true" | "yes" | "1"),
            Self::List(_) => false,
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Operating system type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OsType {
    /// Windows
    Win,
    /// macOS
    #[default]
    Mac,
    /// Linux
    Linux,
}

impl OsType {
    /// All accepted values
    pub const ALL: [OsType; 3] = [OsType::Win, OsType::Mac, OsType::Linux];

    /// Settings spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Mac => "mac",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsType {
    type Err = VideoToolsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|os| os.as_str() == s)
            .ok_or_else(|| VideoToolsError::invalid_setting(keys::OS, "one of win/mac/linux"))
    }
}

/// What the user asked the tool to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run the setup wizard
    Setup,
    /// Ingest media from the source volumes
    Ingest,
    /// Anything else
    Other(String),
}

impl Action {
    /// Parse an action name
    pub fn parse(name: &str) -> Self {
        match name {
            "setup" => Self::Setup,
            "ingest" => Self::Ingest,
            other => Self::Other(other.to_string()),
        }
    }
}

/// The flat settings map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, SettingValue>,
}

impl Settings {
    /// Empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// First-run settings: current version, action forced to setup
    pub fn fresh() -> Self {
        let mut settings = Self::new();
        settings.set(keys::VERSION, crate::VERSION);
        settings.set(keys::ACTION, "setup");
        settings
    }

    /// Get a raw value
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Get a text value
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SettingValue::as_text)
    }

    /// Get a list value
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).and_then(SettingValue::to_list)
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a value
    pub fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.values.remove(key)
    }

    /// True if the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// True if these settings were written by this version of the tool
    pub fn is_current(&self) -> bool {
        self.get_text(keys::VERSION) == Some(crate::VERSION)
    }

    /// Force setup when the settings were written by another version.
    ///
    /// Returns true if the settings were stale.
    pub fn check_version(&mut self) -> bool {
        if self.is_current() {
            return false;
        }
        self.set(keys::ACTION, "setup");
        true
    }

    /// The requested action, if one was given as text
    pub fn action(&self) -> Option<Action> {
        self.get_text(keys::ACTION).map(Action::parse)
    }

    /// The project name, if set
    pub fn project(&self) -> Option<&str> {
        self.get_text(keys::PROJECT)
    }

    /// True if a flag key is set to a truthy value
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).map(SettingValue::is_truthy).unwrap_or(false)
    }

    /// Merge command-line tokens into the settings.
    ///
    /// `key=value` sets `key` to the text after the first `=`; a token without
    /// `=` sets that key to `true`. Later tokens override earlier ones.
    pub fn apply_args<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            match token.split_once('=') {
                Some((key, value)) => self.set(key, value),
                None => self.set(token, true),
            }
        }
    }

    /// Setup-managed keys with no value, which an ingest fills from defaults
    pub fn missing_managed_keys(&self) -> Vec<&'static str> {
        keys::MANAGED
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }

    /// Extract the typed configuration an ingest needs
    pub fn ingest_config(&self) -> Result<IngestConfig> {
        let os = match self.get(keys::OS) {
            None => DEFAULT_OS,
            Some(SettingValue::Text(s)) => s.parse()?,
            Some(_) => return Err(VideoToolsError::invalid_setting(keys::OS, "one of win/mac/linux")),
        };

        let volumes_base = self.text_or(keys::VOLUMES_BASE, DEFAULT_VOLUMES_BASE)?;
        let work_volume = self.text_or(keys::WORK_VOLUME, DEFAULT_WORK_VOLUME)?;

        let project = match self.get(keys::PROJECT) {
            None => return Err(VideoToolsError::MissingSetting(keys::PROJECT.to_string())),
            Some(SettingValue::Text(s)) if !s.is_empty() => s.clone(),
            Some(_) => return Err(VideoToolsError::invalid_setting(keys::PROJECT, "a non-empty name")),
        };

        let source_volumes = self.list_or(keys::SOURCE_VOLUMES, default_source_volumes)?;
        let extensions = self.list_or(keys::EXTENSIONS, default_extensions)?;

        Ok(IngestConfig {
            os,
            volumes_base: PathBuf::from(volumes_base),
            work_volume,
            project,
            source_volumes,
            extensions,
            quiet: self.flag(keys::QUIET),
        })
    }

    fn text_or(&self, key: &str, default: &str) -> Result<String> {
        match self.get(key) {
            None => Ok(default.to_string()),
            Some(SettingValue::Text(s)) => Ok(s.clone()),
            Some(_) => Err(VideoToolsError::invalid_setting(key, "text")),
        }
    }

    fn list_or(&self, key: &str, default: fn() -> Vec<String>) -> Result<Vec<String>> {
        let list = match self.get(key) {
            None => default(),
            Some(value) => value
                .to_list()
                .ok_or_else(|| VideoToolsError::invalid_setting(key, "a list of strings"))?,
        };
        if list.is_empty() {
            return Err(VideoToolsError::invalid_setting(key, "a non-empty list"));
        }
        Ok(list)
    }

    /// Pretty JSON rendering, as written to disk
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VideoToolsError::config(format!("Failed to serialize settings: {}", e)))
    }
}

/// Typed configuration for one ingest run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Operating system type
    pub os: OsType,
    /// Directory containing all volumes
    pub volumes_base: PathBuf,
    /// Volume holding the projects
    pub work_volume: String,
    /// Project name
    pub project: String,
    /// Source volume names, as configured
    pub source_volumes: Vec<String>,
    /// Extensions, as configured
    pub extensions: Vec<String>,
    /// Hide the progress spinner
    pub quiet: bool,
}
