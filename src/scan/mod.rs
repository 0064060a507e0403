//! Library scanner
//!
//! Walks a library root recursively and collects every file whose name ends
//! with a given extension. The walk is synchronous and single-pass; entries
//! inside a directory are visited in file-name order so repeated scans of an
//! unchanged tree return the same sequence.

pub mod error;

pub use error::ScanError;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the paths of all files under `root` whose name ends with `extension`
///
/// The match is a case-sensitive suffix match on the file name, so the
/// extension should include its leading dot (`".epub"`). An empty extension
/// matches every file. Directories are never returned, even when their name
/// matches.
///
/// # Errors
///
/// Returns `ScanError::RootNotFound` if `root` does not exist, or
/// `ScanError::Walk` if any traversal step fails. No partial result is
/// returned on error.
///
/// # Examples
/// ```no_run
/// use shelfr::scan::scan;
///
/// let books = scan("/home/me/Books", ".epub").unwrap();
/// for book in books {
///     println!("{}", book.display());
/// }
/// ```
pub fn scan(root: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if matches_extension(entry.file_name().to_string_lossy().as_ref(), extension) {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

/// Check whether a file name carries the wanted extension
fn matches_extension(file_name: &str, extension: &str) -> bool {
    file_name.ends_with(extension)
}
