//! Testing utilities for shelfr
//!
//! Provides a `LibraryFixture` that lays out a throwaway e-book directory on
//! disk and records tags in a `MemoryStore`, plus the small sample index used
//! across the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::index::TagIndex;
use crate::tags::{MemoryStore, UNTAGGED};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty file, including missing parent directories
///
/// # Panics
/// Panics if the file cannot be created.
pub fn touch(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    let mut file = fs::File::create(path).expect("Failed to create test file");
    file.write_all(b"test content").expect("Failed to write test file");
}

/// Turn string literals into owned tag names
#[must_use]
pub fn tags_of(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| (*t).to_string()).collect()
}

/// The three-book index used throughout the tests
///
/// - `F1` -> `philosophy`
/// - `F2` -> `religion`, `philosophy`
/// - `F3` -> `untagged`
#[must_use]
pub fn sample_index() -> TagIndex {
    TagIndex::from_entries(vec![
        (PathBuf::from("F1"), tags_of(&["philosophy"])),
        (PathBuf::from("F2"), tags_of(&["religion", "philosophy"])),
        (PathBuf::from("F3"), tags_of(&[UNTAGGED])),
    ])
}

/// Temporary e-book library with tags held in memory
///
/// The directory is removed when the fixture is dropped.
///
/// # Examples
/// ```ignore
/// let fixture = LibraryFixture::new()
///     .book("demons.epub", Some("philosophy"))
///     .book("heretics.epub", None);
/// let index = IndexBuilder::new(fixture.root(), ".epub", fixture.store()).build()?;
/// ```
pub struct LibraryFixture {
    dir: TempDir,
    store: MemoryStore,
}

impl LibraryFixture {
    /// Create an empty library
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp library"),
            store: MemoryStore::new(),
        }
    }

    /// Add a book file, optionally with a raw tag attribute value
    #[must_use]
    pub fn book(self, name: &str, tags: Option<&str>) -> Self {
        let path = self.path(name);
        touch(&path);
        let store = match tags {
            Some(raw) => self.store.with_tags(path, raw),
            None => self.store,
        };
        Self {
            dir: self.dir,
            store,
        }
    }

    /// Add a file that is not a book
    #[must_use]
    pub fn other(self, name: &str) -> Self {
        touch(self.path(name));
        self
    }

    /// Library root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the library
    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Store holding the tags of the library's books
    #[must_use]
    pub const fn store(&self) -> &MemoryStore {
        &self.store
    }
}
