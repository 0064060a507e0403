//! Book title lookup
//!
//! The picker shows titles, not paths. `EpubTitles` reads the title from the
//! EPUB package metadata; anything that goes wrong (not a zip, no OPF, no
//! title) falls back to the file name.

use crate::index::TagIndex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Trait for resolving a display title for a book file
pub trait TitleLookup {
    /// Title to display for `path`; never fails
    fn title_for(&self, path: &Path) -> String;
}

/// File name of `path`, or the whole path if it has none
#[must_use]
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Titles taken from the file name only
#[derive(Debug, Clone, Copy, Default)]
pub struct FileNameTitles;

impl TitleLookup for FileNameTitles {
    fn title_for(&self, path: &Path) -> String {
        file_name_of(path)
    }
}

/// Titles read from EPUB metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct EpubTitles;

impl EpubTitles {
    fn read_title(path: &Path) -> Option<String> {
        let doc = match epub::doc::EpubDoc::new(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no epub metadata");
                return None;
            }
        };

        doc.mdata("title")
            .map(|m| m.value.trim().to_string())
            .filter(|title| !title.is_empty())
    }
}

impl TitleLookup for EpubTitles {
    fn title_for(&self, path: &Path) -> String {
        Self::read_title(path).unwrap_or_else(|| file_name_of(path))
    }
}

/// Titles resolved once for every file of an index
///
/// Lookups for files outside the cache go to the file name.
#[derive(Debug, Clone, Default)]
pub struct TitleCache {
    titles: HashMap<PathBuf, String>,
}

impl TitleCache {
    /// Resolve the title of every file in `index` with `lookup`
    pub fn build<L: TitleLookup + ?Sized>(index: &TagIndex, lookup: &L) -> Self {
        let titles = index
            .files()
            .iter()
            .map(|path| (path.clone(), lookup.title_for(path)))
            .collect();
        Self { titles }
    }

    /// Number of cached titles
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl TitleLookup for TitleCache {
    fn title_for(&self, path: &Path) -> String {
        self.titles
            .get(path)
            .cloned()
            .unwrap_or_else(|| file_name_of(path))
    }
}
