//! Scan-specific error types
//!
//! A scan either walks the whole library or fails. There is no partial
//! result, so every variant here is fatal to the scan that produced it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking the library directory
#[derive(Debug, Error)]
pub enum ScanError {
    /// The library root does not exist
    #[error("Library directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// A traversal step failed (permissions, vanished entries, loops)
    #[error("Failed to walk library directory: {0}")]
    Walk(#[from] walkdir::Error),
}
