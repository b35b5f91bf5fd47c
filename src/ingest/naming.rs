//! Content-addressed destination names
//!
//! An ingested file is named by the SHA-256 of its content plus its
//! lowercased extension, so identical footage always lands on the same path
//! no matter what the camera called it.

use crate::hash::{hash_bytes, ContentDigest};
use std::fmt;
use std::path::{Path, PathBuf};

/// Destination name of a piece of content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentAddress {
    digest: String,
    extension: String,
}

impl ContentAddress {
    /// Address for an already computed digest
    pub fn new(digest: &ContentDigest, extension: &str) -> Self {
        Self {
            digest: digest.hex.clone(),
            extension: extension.to_lowercase(),
        }
    }

    /// Address for content held in memory
    pub fn for_content(content: &[u8], extension: &str) -> Self {
        Self::new(&hash_bytes(content), extension)
    }

    /// Hex digest part of the name
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Lowercased extension part of the name
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `{digest}.{extension}`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.digest, self.extension)
    }

    /// Full destination path inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl fmt::Display for ContentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.digest, self.extension)
    }
}
