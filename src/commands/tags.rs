//! Tags command - list the tags found in the library

use crate::{ShelfrError, index::TagIndex, output};
use serde::Serialize;

type Result<T> = std::result::Result<T, ShelfrError>;

/// A tag and the number of books carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// Tag name
    pub tag: String,
    /// Number of books carrying the tag
    pub count: usize,
}

/// Sorted tags with their bucket sizes
#[must_use]
pub fn tag_counts(index: &TagIndex) -> Vec<TagCount> {
    index
        .unique_tags()
        .into_iter()
        .map(|tag| TagCount {
            count: index.files_for(&tag).len(),
            tag,
        })
        .collect()
}

/// Execute the tags command
///
/// # Errors
/// Returns an error if JSON serialization fails
pub fn execute(index: &TagIndex, counts: bool, json: bool, quiet: bool) -> Result<()> {
    if json {
        let rendered = if counts {
            serde_json::to_string_pretty(&tag_counts(index))
        } else {
            serde_json::to_string_pretty(&index.unique_tags())
        };
        println!("{}", rendered?);
        return Ok(());
    }

    if index.is_empty() {
        if !quiet {
            println!("No books found in library.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in library:");
    }
    if counts {
        for entry in tag_counts(index) {
            println!("{}", output::tag_with_count(&entry.tag, entry.count, quiet));
        }
    } else {
        for tag in index.unique_tags() {
            println!("{}", output::tag(&tag, quiet));
        }
    }
    Ok(())
}
