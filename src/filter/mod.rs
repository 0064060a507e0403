//! Multi-tag intersection filter
//!
//! Narrows a library to the files carrying every selected tag. The first
//! selected tag's bucket seeds the result and each further tag intersects it.
//! The index is only read, never changed.

mod intersect;

pub use intersect::intersect;

use crate::index::TagToFiles;
use std::path::PathBuf;

/// Files present under every tag in `selected`
///
/// An unknown tag contributes an empty bucket, so any selection containing
/// one yields an empty result. An empty selection also yields an empty
/// result. The order of the returned paths is not guaranteed to match any
/// bucket's order.
///
/// # Examples
/// ```
/// use shelfr::filter::filter_by_tags;
/// use shelfr::index::TagToFiles;
/// use std::path::PathBuf;
///
/// let mut index = TagToFiles::new();
/// index.insert("philosophy".into(), vec![PathBuf::from("F1"), PathBuf::from("F2")]);
/// index.insert("religion".into(), vec![PathBuf::from("F2")]);
///
/// let selected = vec!["religion".to_string(), "philosophy".to_string()];
/// let hits = filter_by_tags(&selected, &index);
/// assert_eq!(hits, vec![PathBuf::from("F2")]);
/// ```
#[must_use]
pub fn filter_by_tags(selected: &[String], tag_to_files: &TagToFiles) -> Vec<PathBuf> {
    let Some((first, rest)) = selected.split_first() else {
        return Vec::new();
    };

    let mut result = bucket(tag_to_files, first).to_vec();

    for tag in rest {
        if result.is_empty() {
            break;
        }
        result = intersect(&result, bucket(tag_to_files, tag));
    }

    result
}

fn bucket<'a>(tag_to_files: &'a TagToFiles, tag: &str) -> &'a [PathBuf] {
    tag_to_files.get(tag).map(Vec::as_slice).unwrap_or_default()
}
