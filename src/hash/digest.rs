//! SHA-256 content digests
//!
//! Files are hashed through a fixed-size buffer so clips of any length are
//! digested without loading them into memory.

use crate::error::{IoResultExt, Result, VideoToolsError};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default read buffer for hashing (1MB)
pub const HASH_BUFFER_SIZE: usize = 1024 * 1024;

/// Digest of a piece of content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    /// SHA-256 as lowercase hex (64 characters)
    pub hex: String,
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Incremental SHA-256 hasher
#[derive(Default)]
pub struct StreamingHasher {
    hasher: Sha256,
}

impl StreamingHasher {
    /// Create a new streaming hasher
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a chunk of data
    pub fn process(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Finalize and get the result
    pub fn finalize(self) -> ContentDigest {
        ContentDigest {
            hex: hex::encode(self.hasher.finalize()),
        }
    }
}

/// Compute the digest of a file
pub fn hash_file(path: &Path) -> Result<ContentDigest> {
    hash_file_with_buffer(path, HASH_BUFFER_SIZE)
}

/// Compute the digest of a file with a custom buffer size
pub fn hash_file_with_buffer(path: &Path, buffer_size: usize) -> Result<ContentDigest> {
    let file = File::open(path).with_path(path)?;
    let mut reader = BufReader::with_capacity(buffer_size, file);
    let mut hasher = StreamingHasher::new();
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| VideoToolsError::io(path, e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.process(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize())
}

/// Compute the digest of data in memory
pub fn hash_bytes(data: &[u8]) -> ContentDigest {
    let mut hasher = StreamingHasher::new();
    hasher.process(data);
    hasher.finalize()
}
