//! File system operations module
//!
//! Finds media files on source volumes and copies them with their
//! permissions and timestamps intact.

mod operations;
mod scanner;

pub use operations::*;
pub use scanner::*;
