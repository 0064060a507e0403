//! Attribute storage backends
//!
//! The tag list of a file lives in a single named attribute. `TagStore`
//! abstracts the get/set pair so the reader and the index builder can run
//! against real extended attributes or an in-memory map.

use std::io;
use std::path::Path;

/// Default extended attribute holding the comma-separated tag list
pub const DEFAULT_ATTRIBUTE: &str = "user.xdg.tags";

/// Trait for backends that hold one raw attribute value per file
pub trait TagStore {
    /// Name of the attribute this store reads and writes
    fn attribute(&self) -> &str;

    /// Read the raw attribute value of `path`
    ///
    /// Returns `Ok(None)` when the file has no such attribute.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` for any failure other than absence.
    fn get(&self, path: &Path) -> io::Result<Option<Vec<u8>>>;

    /// Overwrite the raw attribute value of `path`
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the value cannot be stored.
    fn set(&self, path: &Path, value: &[u8]) -> io::Result<()>;
}

/// Tag store backed by filesystem extended attributes
#[derive(Debug, Clone)]
pub struct XattrStore {
    attribute: String,
}

impl XattrStore {
    /// Create a store for the given attribute name
    #[must_use]
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Default for XattrStore {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE)
    }
}

impl TagStore for XattrStore {
    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn get(&self, path: &Path) -> io::Result<Option<Vec<u8>>> {
        xattr::get(path, &self.attribute)
    }

    fn set(&self, path: &Path, value: &[u8]) -> io::Result<()> {
        xattr::set(path, &self.attribute, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attribute() {
        let store = XattrStore::default();
        assert_eq!(store.attribute(), "user.xdg.tags");
    }

    #[test]
    fn test_custom_attribute() {
        let store = XattrStore::new("user.shelfr.tags");
        assert_eq!(store.attribute(), "user.shelfr.tags");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let store = XattrStore::default();
        let result = store.get(Path::new("/definitely/not/here.epub"));
        assert!(result.is_err());
    }
}
