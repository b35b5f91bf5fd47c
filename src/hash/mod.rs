//! Content hashing module
//!
//! Provides streaming SHA-256 digests of files and in-memory data. The digest
//! is what names every ingested file.

mod digest;

pub use digest::*;
