//! Progress reporting module
//!
//! Provides a status spinner for ingest.

mod reporter;

pub use reporter::*;
