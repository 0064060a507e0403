//! Tag attribute error types
//!
//! # Error Types
//!
//! - **`Read`**: the attribute exists but could not be read (permissions,
//!   unsupported filesystem, I/O)
//! - **`InvalidUtf8`**: the attribute value is not UTF-8 text
//! - **`Write`**: setting the attribute failed
//! - **`InvalidTag`**: a tag cannot be stored without corrupting the list
//!
//! A missing attribute is not an error; the reader reports it as the
//! untagged sentinel.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the tag attribute of a file
#[derive(Debug, Error)]
pub enum TagError {
    /// Reading the attribute failed for a reason other than absence
    #[error("Failed to read tags of {}: {source}", path.display())]
    Read {
        /// File whose attribute was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The attribute value is not valid UTF-8
    #[error("Tag attribute of {} is not valid UTF-8", path.display())]
    InvalidUtf8 {
        /// File carrying the malformed value
        path: PathBuf,
    },

    /// Writing the attribute failed
    #[error("Failed to write tags of {}: {source}", path.display())]
    Write {
        /// File whose attribute was written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A tag is empty or contains the list delimiter
    #[error("Invalid tag '{0}': tags must be non-empty and must not contain ','")]
    InvalidTag(String),
}
