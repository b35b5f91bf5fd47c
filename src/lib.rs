//! # Video Tools - The Video Workflow Helper
//!
//! Video Tools keeps a small per-user settings file and uses it to ingest
//! camera media into a project tree. Every ingested clip is named after the
//! SHA-256 of its content, so the same footage pulled from two cards lands
//! in one file.
//!
//! ## Actions
//!
//! - **setup**: interactive wizard for the operating system type, volume
//!   paths, source card names and media extensions
//! - **ingest**: scan the source volumes and copy every matching clip to
//!   `{volumes-base}/{work-volume}/{project}/media/originals/{sha256}.{ext}`
//!
//! Any setting can be overridden for one run with `key=value` arguments.
//!
//! ## Quick Start
//!
//! ```no_run
//! use video_tools::config::{IngestConfig, OsType};
//! use video_tools::ingest::Ingester;
//! use video_tools::prompt::Console;
//! use std::path::PathBuf;
//!
//! let config = IngestConfig {
//!     os: OsType::Mac,
//!     volumes_base: PathBuf::from("/Volumes"),
//!     work_volume: "video-disk".to_string(),
//!     project: "wedding".to_string(),
//!     source_volumes: vec!["CANON".to_string()],
//!     extensions: vec!["MOV".to_string()],
//!     quiet: false,
//! };
//!
//! let mut console = Console::stdio();
//! let report = Ingester::new(config, &mut console).run().unwrap();
//! report.print_summary(&mut console);
//! ```
//!
//! ## Content Addressing
//!
//! ```
//! use video_tools::ingest::ContentAddress;
//!
//! let address = ContentAddress::for_content(b"abc", "MOV");
//! assert_eq!(
//!     address.file_name(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad.mov"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod fs;
pub mod hash;
pub mod ingest;
pub mod progress;
pub mod prompt;
pub mod setup;

// Re-export commonly used types
pub use config::{IngestConfig, Settings, SettingsStore};
pub use error::{Result, VideoToolsError};
pub use ingest::{IngestReport, Ingester};
pub use progress::ProgressReporter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use video_tools::prelude::*;
    //! ```

    pub use crate::app::{run, RunOutcome};
    pub use crate::config::{keys, IngestConfig, OsType, Settings, SettingsStore};
    pub use crate::error::{Result, VideoToolsError};
    pub use crate::hash::{hash_file, ContentDigest};
    pub use crate::ingest::{ContentAddress, IngestOutcome, IngestReport, Ingester};
    pub use crate::progress::ProgressReporter;
    pub use crate::prompt::{Console, Prompter, ScriptedPrompter};
    pub use crate::setup::run_setup;
}
