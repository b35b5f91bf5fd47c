//! File operations for ingest
//!
//! Copies a file's content together with its permissions and timestamps,
//! and creates destination directory trees.

use crate::error::{IoResultExt, Result, VideoToolsError};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default copy buffer (1MB)
pub const COPY_BUFFER_SIZE: usize = 1024 * 1024;

/// Buffered file copier that preserves metadata
#[derive(Debug, Clone)]
pub struct FileCopier {
    buffer_size: usize,
}

impl Default for FileCopier {
    fn default() -> Self {
        Self {
            buffer_size: COPY_BUFFER_SIZE,
        }
    }
}

impl FileCopier {
    /// Copy `source` to `dest`, replacing `dest` if it exists.
    ///
    /// The content is written to a hidden file next to `dest` and renamed
    /// over it once complete, so `dest` is never left missing or partial.
    /// Returns the number of bytes copied.
    pub fn copy(&self, source: &Path, dest: &Path) -> Result<u64> {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).with_path(parent)?;
        }

        let partial = partial_path(dest);
        let result = self
            .copy_buffered(source, &partial)
            .and_then(|bytes| copy_metadata(source, &partial).map(|()| bytes))
            .and_then(|bytes| std::fs::rename(&partial, dest).with_path(dest).map(|()| bytes));

        if result.is_err() {
            let _ = std::fs::remove_file(&partial);
        }
        result
    }

    fn copy_buffered(&self, source: &Path, dest: &Path) -> Result<u64> {
        let src_file = File::open(source).with_path(source)?;
        let dst_file = File::create(dest).with_path(dest)?;

        let mut reader = BufReader::with_capacity(self.buffer_size, src_file);
        let mut writer = BufWriter::with_capacity(self.buffer_size, dst_file);

        let bytes_copied = std::io::copy(&mut reader, &mut writer)
            .map_err(|e| VideoToolsError::io(source, e))?;

        writer.flush().with_path(dest)?;
        Ok(bytes_copied)
    }
}

/// `{dir}/.{name}.part`, hidden so a rescan never picks it up
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(dest.file_name().unwrap_or_default());
    name.push(".part");
    dest.with_file_name(name)
}

fn copy_metadata(source: &Path, dest: &Path) -> Result<()> {
    let metadata = std::fs::metadata(source).with_path(source)?;

    let atime = filetime::FileTime::from_last_access_time(&metadata);
    let mtime = filetime::FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(dest, atime, mtime).with_path(dest)?;

    // Permissions last, a read-only mode can block setting the times
    std::fs::set_permissions(dest, metadata.permissions()).with_path(dest)?;
    Ok(())
}

/// True if both paths exist and resolve to the same file
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Create `dir` and any missing parents.
///
/// Returns true if anything had to be created.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir).with_path(dir)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_copy_small_file() {
        let src_dir = TempDir::new().unwrap();
        let dst_dir = TempDir::new().unwrap();

        let src = create_test_file(src_dir.path(), "clip.MOV", &[0xAB; 1024]);
        let dst = dst_dir.path().join("clip.mov");

        let bytes = FileCopier::default().copy(&src, &dst).unwrap();

        assert_eq!(bytes, 1024);
        assert_eq!(std::fs::read(&dst).unwrap(), vec![0xAB; 1024]);
        assert_eq!(std::fs::read_dir(dst_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_copy_empty_file() {
        let src_dir = TempDir::new().unwrap();
        let src = create_test_file(src_dir.path(), "empty.mp4", b"");
        let dst = src_dir.path().join("out/empty.mp4");

        assert_eq!(FileCopier::default().copy(&src, &dst).unwrap(), 0);
        assert!(dst.exists());
    }

    #[test]
    fn test_copy_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let src = create_test_file(dir.path(), "new.MOV", b"new content");
        let dst = create_test_file(dir.path(), "old.mov", b"old content that is longer");

        FileCopier::default().copy(&src, &dst).unwrap();
        assert_eq!(std::fs::read(&dst).unwrap(), b"new content");
    }

    #[test]
    fn test_copy_onto_itself_keeps_content() {
        let dir = TempDir::new().unwrap();
        let clip = create_test_file(dir.path(), "clip.mov", b"only copy");

        FileCopier::default().copy(&clip, &clip).unwrap();

        assert_eq!(std::fs::read(&clip).unwrap(), b"only copy");
        assert!(!partial_path(&clip).exists());
    }

    #[test]
    fn test_failed_copy_leaves_destination() {
        let dir = TempDir::new().unwrap();
        let dst = create_test_file(dir.path(), "kept.mov", b"existing");

        let result = FileCopier::default().copy(&dir.path().join("gone.MOV"), &dst);

        assert!(result.is_err());
        assert_eq!(std::fs::read(&dst).unwrap(), b"existing");
        assert!(!partial_path(&dst).exists());
    }

    #[test]
    fn test_copy_preserves_mtime() {
        let dir = TempDir::new().unwrap();
        let src = create_test_file(dir.path(), "clip.MTS", b"footage");
        let old = filetime::FileTime::from_unix_time(1_438_000_000, 0);
        filetime::set_file_mtime(&src, old).unwrap();

        let dst = dir.path().join("copy.mts");
        FileCopier::default().copy(&src, &dst).unwrap();

        let meta = std::fs::metadata(&dst).unwrap();
        assert_eq!(filetime::FileTime::from_last_modification_time(&meta), old);
    }

    #[test]
    fn test_copy_missing_source() {
        let dir = TempDir::new().unwrap();
        let err = FileCopier::default()
            .copy(&dir.path().join("gone.MOV"), &dir.path().join("out.mov"))
            .unwrap_err();
        assert_eq!(err.path(), Some(&dir.path().join("gone.MOV")));
    }

    #[test]
    fn test_partial_path_is_hidden_sibling() {
        let partial = partial_path(Path::new("/media/originals/abc.mov"));
        assert_eq!(partial, PathBuf::from("/media/originals/.abc.mov.part"));
    }

    #[test]
    fn test_is_same_file() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(dir.path(), "a.mov", b"x");
        let b = create_test_file(dir.path(), "b.mov", b"x");

        assert!(is_same_file(&a, &a));
        assert!(is_same_file(&a, &dir.path().join(".").join("a.mov")));
        assert!(!is_same_file(&a, &b));
        assert!(!is_same_file(&a, &dir.path().join("missing.mov")));
    }

    #[test]
    fn test_ensure_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("video-disk/wedding/media/originals");

        assert!(ensure_dir(&nested).unwrap());
        assert!(nested.is_dir());
        assert!(!ensure_dir(&nested).unwrap());
    }
}
