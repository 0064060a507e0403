//! Shelfr - a tag picker for e-book libraries
//!
//! Tags live in each book's `user.xdg.tags` extended attribute as a
//! comma-separated list. Shelfr scans a library directory, builds a
//! bidirectional index between books and tags, and narrows the library down
//! to the books carrying every selected tag, either from the command line or
//! in an interactive terminal picker.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod index;
pub mod logging;
pub mod output;
pub mod scan;
pub mod tags;
pub mod title;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ShelfrError {
    /// Library scan error
    #[error("Scan error: {0}")]
    ScanError(#[from] scan::ScanError),
    /// Tag attribute error
    #[error("Tag error: {0}")]
    TagError(#[from] tags::TagError),
    /// Picker error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_module_errors_convert() {
        let err: ShelfrError = scan::ScanError::RootNotFound(PathBuf::from("/nope")).into();
        assert!(err.to_string().contains("/nope"));

        let err: ShelfrError = tags::TagError::InvalidTag("a,b".into()).into();
        assert!(matches!(err, ShelfrError::TagError(_)));
    }
}
