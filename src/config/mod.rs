//! Configuration module for Video Tools
//!
//! Provides the persisted key-value settings, the command-line overlay,
//! and the typed ingest configuration derived from them.

mod cli;
mod settings;
mod store;

pub use cli::*;
pub use settings::*;
pub use store::*;
