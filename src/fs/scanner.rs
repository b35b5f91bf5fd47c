//! Media file discovery
//!
//! Walks a source volume and collects every regular file whose name ends in
//! a given extension. Matching is case-sensitive on the literal extension,
//! so `MOV` and `mov` are separate passes over the tree.

use crate::error::{Result, VideoToolsError};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Find all files under `root` whose name ends with `.{extension}`.
///
/// Entries are visited in file-name order within each directory. Hidden
/// entries are skipped below `root` and directory symlinks are not followed;
/// a symlink to a regular file matches like the file itself. Any error while
/// walking is returned rather than skipped.
pub fn find_with_extension(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension);
    let mut found = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.map_err(|e| walk_error(root, e))?;

        let matches = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(&suffix))
            .unwrap_or(false);

        if matches && is_regular_file(&entry) {
            found.push(entry.into_path());
        }
    }

    debug!("Found {} '{}' files under {:?}", found.len(), extension, root);
    Ok(found)
}

/// Regular file, or a symlink that resolves to one
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return std::fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
    }
    file_type.is_file()
}

/// Check if an entry is hidden (Unix convention)
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn walk_error(root: &Path, err: walkdir::Error) -> VideoToolsError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message));
    VideoToolsError::io(path, source)
}
