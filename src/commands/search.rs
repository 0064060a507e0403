//! Search command - find books carrying every given tag

use crate::{ShelfrError, index::TagIndex, output, title::TitleLookup};
use serde::Serialize;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ShelfrError>;

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Book file
    pub path: PathBuf,
    /// Book title, when titles were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Books carrying all of `tags`, in scan order
///
/// Titles are only looked up when `lookup` is given.
#[must_use]
pub fn find<L: TitleLookup + ?Sized>(
    index: &TagIndex,
    tags: &[String],
    lookup: Option<&L>,
) -> Vec<SearchHit> {
    if tags.is_empty() {
        return Vec::new();
    }

    index
        .listing(tags)
        .into_iter()
        .map(|path| SearchHit {
            title: lookup.map(|l| l.title_for(&path)),
            path,
        })
        .collect()
}

/// Execute the search command
///
/// # Errors
/// Returns an error if JSON serialization fails
pub fn execute<L: TitleLookup + ?Sized>(
    index: &TagIndex,
    tags: &[String],
    lookup: Option<&L>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let hits = find(index, tags, lookup);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        if !quiet {
            println!("No books found with tags: {}", tags.join(", "));
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} book(s) with tags [{}]:", hits.len(), tags.join(", "));
    }
    for hit in &hits {
        println!("{}", output::book(&hit.path, hit.title.as_deref(), quiet));
    }
    Ok(())
}
