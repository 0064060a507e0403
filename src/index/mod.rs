//! Tag index
//!
//! Builds the two lookup maps the picker works from:
//! - `file_to_tags`: file path -> tag list, one entry per scanned file
//! - `tag_to_files`: tag -> file paths, buckets in scan order
//!
//! Every scanned file lands in at least one bucket. Files without tags (or
//! whose attribute could not be read) are filed under the untagged sentinel.
//! An index is never updated in place: a rescan builds a fresh one.

use crate::filter;
use crate::scan::{self, ScanError};
use crate::tags::{self, TagStore, UNTAGGED};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Map from file path to its tag list
pub type FileToTags = HashMap<PathBuf, Vec<String>>;

/// Map from tag to the files carrying it
pub type TagToFiles = HashMap<String, Vec<PathBuf>>;

/// Bidirectional tag index over one library scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    files: Vec<PathBuf>,
    file_to_tags: FileToTags,
    tag_to_files: TagToFiles,
}

impl TagIndex {
    /// Build an index from files and their already-read tag lists
    ///
    /// Entries are taken in order; that order becomes the scan order of the
    /// index and the order of every bucket. An empty tag list is filed under
    /// the untagged sentinel. A path given twice keeps its first tag list.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PathBuf, Vec<String>)>,
    {
        let mut index = Self::default();
        for (path, tags) in entries {
            index.insert(path, tags);
        }
        index
    }

    fn insert(&mut self, path: PathBuf, tags: Vec<String>) {
        if self.file_to_tags.contains_key(&path) {
            return;
        }

        let tags = if tags.is_empty() { tags::untagged() } else { tags };

        for tag in &tags {
            let bucket = self.tag_to_files.entry(tag.clone()).or_default();
            // a file carrying the same tag twice is still filed once
            if bucket.last() != Some(&path) {
                bucket.push(path.clone());
            }
        }

        self.files.push(path.clone());
        self.file_to_tags.insert(path, tags);
    }

    /// All indexed files in scan order
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// The file -> tags map
    #[must_use]
    pub const fn file_to_tags(&self) -> &FileToTags {
        &self.file_to_tags
    }

    /// The tag -> files map
    #[must_use]
    pub const fn tag_to_files(&self) -> &TagToFiles {
        &self.tag_to_files
    }

    /// Tags of one file, if it was indexed
    #[must_use]
    pub fn tags_for(&self, path: &Path) -> Option<&[String]> {
        self.file_to_tags.get(path).map(Vec::as_slice)
    }

    /// Files carrying `tag`, empty if the tag is unknown
    #[must_use]
    pub fn files_for(&self, tag: &str) -> &[PathBuf] {
        self.tag_to_files.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Distinct tag names, sorted
    #[must_use]
    pub fn unique_tags(&self) -> Vec<String> {
        unique_tags(&self.tag_to_files)
    }

    /// Files carrying every tag in `selected`
    ///
    /// Returns an empty list for an empty selection. The order of the result
    /// is not guaranteed.
    #[must_use]
    pub fn filter(&self, selected: &[String]) -> Vec<PathBuf> {
        filter::filter_by_tags(selected, &self.tag_to_files)
    }

    /// Files to list for a tag selection, in scan order
    ///
    /// Every file when nothing is selected, otherwise the files carrying all
    /// selected tags.
    #[must_use]
    pub fn listing(&self, selected: &[String]) -> Vec<PathBuf> {
        if selected.is_empty() {
            return self.files.clone();
        }

        let hits: HashSet<PathBuf> = self.filter(selected).into_iter().collect();
        self.files
            .iter()
            .filter(|path| hits.contains(*path))
            .cloned()
            .collect()
    }

    /// Number of indexed files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the index holds no files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether any file is untagged
    #[must_use]
    pub fn has_untagged(&self) -> bool {
        self.tag_to_files.contains_key(UNTAGGED)
    }
}

/// Distinct keys of a tag -> files map, sorted lexicographically
#[must_use]
pub fn unique_tags(tag_to_files: &TagToFiles) -> Vec<String> {
    let mut tags: Vec<String> = tag_to_files.keys().cloned().collect();
    tags.sort();
    tags
}

/// Builds a [`TagIndex`] by scanning a library and reading each file's tags
pub struct IndexBuilder<'a, S: TagStore + ?Sized> {
    root: PathBuf,
    extension: String,
    store: &'a S,
}

impl<'a, S: TagStore + ?Sized> IndexBuilder<'a, S> {
    /// Create a builder for the library at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>, store: &'a S) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            store,
        }
    }

    /// Library root this builder scans
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the library and build a fresh index
    ///
    /// A file whose attribute cannot be read is indexed as untagged and the
    /// failure is logged; it does not abort the build.
    ///
    /// # Errors
    ///
    /// Returns `ScanError` if the library cannot be walked.
    pub fn build(&self) -> Result<TagIndex, ScanError> {
        let paths = scan::scan(&self.root, &self.extension)?;

        let entries = paths.into_iter().map(|path| {
            let tags = match tags::read_tags(self.store, &path) {
                Ok(tags) => tags,
                Err(e) => {
                    tracing::warn!(error = %e, "treating file as untagged");
                    tags::untagged()
                }
            };
            (path, tags)
        });

        let index = TagIndex::from_entries(entries);
        tracing::debug!(
            root = %self.root.display(),
            files = index.len(),
            tags = index.tag_to_files().len(),
            "built tag index"
        );
        Ok(index)
    }
}
