//! UI error types

use crate::scan::ScanError;
use thiserror::Error;

/// Errors that can occur while running the picker
#[derive(Debug, Error)]
pub enum UiError {
    /// The initial library scan failed
    #[error("Failed to index library: {0}")]
    Scan(#[from] ScanError),

    /// IO error during terminal operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
