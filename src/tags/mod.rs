//! Tag attribute reading and writing
//!
//! A file's tags are stored as one UTF-8 attribute value holding a
//! comma-separated list (`"unread,religion,philosophy"`). Tags are exactly the
//! substrings between commas: no whitespace is trimmed and no duplicates are
//! removed. Empty substrings are not tags.
//!
//! Files without tags are reported under the [`UNTAGGED`] sentinel so that
//! every file can be reached from at least one tag.

pub mod error;
pub mod memory;
pub mod store;

pub use error::TagError;
pub use memory::MemoryStore;
pub use store::{DEFAULT_ATTRIBUTE, TagStore, XattrStore};

use std::path::Path;

/// Sentinel tag for files with no tags
pub const UNTAGGED: &str = "untagged";

/// Delimiter between tags in the raw attribute value
pub const TAG_DELIMITER: char = ',';

/// The tag list assigned to files without tags
#[must_use]
pub fn untagged() -> Vec<String> {
    vec![UNTAGGED.to_string()]
}

/// Split a raw attribute value into tag names
///
/// # Examples
/// ```
/// use shelfr::tags::parse_tags;
///
/// assert_eq!(parse_tags("a,b,c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_tags("a,,b"), vec!["a", "b"]);
/// assert!(parse_tags("").is_empty());
/// ```
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_DELIMITER)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tag names into a raw attribute value
#[must_use]
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Read the tag list of a single file
///
/// An absent attribute, an empty value, or a value with no non-empty
/// substrings yields `["untagged"]`.
///
/// # Errors
///
/// Returns `TagError::Read` if the attribute cannot be read, or
/// `TagError::InvalidUtf8` if its value is not UTF-8.
pub fn read_tags<S: TagStore + ?Sized>(store: &S, path: &Path) -> Result<Vec<String>, TagError> {
    let raw = store.get(path).map_err(|source| TagError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(raw) = raw else {
        return Ok(untagged());
    };

    let value = String::from_utf8(raw).map_err(|_| TagError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let tags = parse_tags(&value);
    if tags.is_empty() {
        Ok(untagged())
    } else {
        Ok(tags)
    }
}

/// Overwrite the tag list of a file
///
/// The attribute is replaced wholesale; nothing is merged.
///
/// # Errors
///
/// Returns `TagError::InvalidTag` if a tag is empty or contains a comma, or
/// `TagError::Write` if the attribute cannot be set.
pub fn write_tags<S: TagStore + ?Sized, T: AsRef<str>>(
    store: &S,
    path: &Path,
    tags: &[T],
) -> Result<(), TagError> {
    for tag in tags {
        validate_tag(tag.as_ref())?;
    }

    store
        .set(path, join_tags(tags).as_bytes())
        .map_err(|source| TagError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Add tags to a file, keeping the ones it already carries
///
/// Reads the current list, drops the untagged sentinel, appends each new tag
/// that is not present yet and writes the result back. Returns the list that
/// was written.
///
/// # Errors
///
/// Returns any `TagError` from reading, validating or writing. A failed read
/// aborts before anything is written.
pub fn add_tags<S: TagStore + ?Sized, T: AsRef<str>>(
    store: &S,
    path: &Path,
    new_tags: &[T],
) -> Result<Vec<String>, TagError> {
    let mut tags: Vec<String> = read_tags(store, path)?
        .into_iter()
        .filter(|tag| tag != UNTAGGED)
        .collect();

    for tag in new_tags {
        let tag = tag.as_ref();
        validate_tag(tag)?;
        if tag != UNTAGGED && !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }

    write_tags(store, path, &tags)?;
    Ok(tags)
}

fn validate_tag(tag: &str) -> Result<(), TagError> {
    if tag.is_empty() || tag.contains(TAG_DELIMITER) {
        return Err(TagError::InvalidTag(tag.to_string()));
    }
    Ok(())
}
