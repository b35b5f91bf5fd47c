//! Media ingest
//!
//! Scans the configured source volumes for media files, hashes each one, and
//! copies it into the project's content-addressed originals directory.

mod layout;
mod naming;
mod pipeline;
mod report;

pub use layout::*;
pub use naming::*;
pub use pipeline::*;
pub use report::*;
