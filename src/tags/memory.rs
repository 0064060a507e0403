//! In-memory tag store
//!
//! Holds attribute values in a map instead of on disk. Used by the test
//! suites and by callers that want to index a library without touching real
//! extended attributes.

use super::store::{DEFAULT_ATTRIBUTE, TagStore};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// Tag store that keeps raw attribute values in memory
///
/// Reads for paths registered with [`MemoryStore::failing_on`] return a
/// permission error, which lets tests exercise the per-file recovery path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<PathBuf, Vec<u8>>>,
    failing: HashSet<PathBuf>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw tag string for `path`
    #[must_use]
    pub fn with_tags(self, path: impl Into<PathBuf>, raw: &str) -> Self {
        self.with_raw(path, raw.as_bytes())
    }

    /// Store raw bytes for `path`
    #[must_use]
    pub fn with_raw(self, path: impl Into<PathBuf>, raw: &[u8]) -> Self {
        self.values.borrow_mut().insert(path.into(), raw.to_vec());
        self
    }

    /// Make every read of `path` fail
    #[must_use]
    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Raw value currently stored for `path`
    #[must_use]
    pub fn raw(&self, path: &Path) -> Option<Vec<u8>> {
        self.values.borrow().get(path).cloned()
    }
}

impl TagStore for MemoryStore {
    fn attribute(&self) -> &str {
        DEFAULT_ATTRIBUTE
    }

    fn get(&self, path: &Path) -> io::Result<Option<Vec<u8>>> {
        if self.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("simulated read failure for {}", path.display()),
            ));
        }
        Ok(self.values.borrow().get(path).cloned())
    }

    fn set(&self, path: &Path, value: &[u8]) -> io::Result<()> {
        self.values
            .borrow_mut()
            .insert(path.to_path_buf(), value.to_vec());
        Ok(())
    }
}
