//! Tag command - write tags to a book

use crate::{
    ShelfrError, output,
    tags::{self, TagStore},
};
use std::path::Path;

type Result<T> = std::result::Result<T, ShelfrError>;

/// Execute the tag command
///
/// Replaces the book's tags, or merges into them when `add` is set.
/// Returns the tags the book carries afterwards.
///
/// # Errors
/// Returns an error if the file does not exist, a tag is invalid, or the
/// attribute cannot be read or written
pub fn execute<S: TagStore + ?Sized>(
    store: &S,
    file: &Path,
    new_tags: &[String],
    add: bool,
    quiet: bool,
) -> Result<Vec<String>> {
    if new_tags.is_empty() {
        return Err(ShelfrError::InvalidInput("No tags provided".into()));
    }
    if !file.is_file() {
        return Err(ShelfrError::InvalidInput(format!(
            "Cannot access path '{}'",
            file.display()
        )));
    }

    let written = if add {
        tags::add_tags(store, file, new_tags)?
    } else {
        tags::write_tags(store, file, new_tags)?;
        new_tags.to_vec()
    };

    tracing::info!(path = %file.display(), tags = %written.join(","), add, "tagged book");
    if !quiet {
        println!("{}", output::tagged(file, &written));
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagError;
    use crate::testing::{LibraryFixture, tags_of};

    #[test]
    fn test_replace_tags() {
        let fixture = LibraryFixture::new().book("a.epub", Some("old"));
        let path = fixture.path("a.epub");

        let tags = tags_of(&["new", "newer"]);
        let written = execute(fixture.store(), &path, &tags, false, true).unwrap();

        assert_eq!(written, vec!["new", "newer"]);
        assert_eq!(fixture.store().raw(&path).as_deref(), Some(&b"new,newer"[..]));
    }

    #[test]
    fn test_add_tags_merges() {
        let fixture = LibraryFixture::new().book("a.epub", Some("old"));
        let path = fixture.path("a.epub");

        let tags = tags_of(&["new", "old"]);
        let written = execute(fixture.store(), &path, &tags, true, true).unwrap();

        assert_eq!(written, vec!["old", "new"]);
        assert_eq!(fixture.store().raw(&path).as_deref(), Some(&b"old,new"[..]));
    }

    #[test]
    fn test_missing_file() {
        let fixture = LibraryFixture::new();
        let path = fixture.path("gone.epub");
        let result = execute(fixture.store(), &path, &tags_of(&["x"]), false, true);
        assert!(matches!(result, Err(ShelfrError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_tag_is_rejected() {
        let fixture = LibraryFixture::new().book("a.epub", None);
        let path = fixture.path("a.epub");
        let result = execute(fixture.store(), &path, &tags_of(&["a,b"]), false, true);
        assert!(matches!(result, Err(ShelfrError::TagError(TagError::InvalidTag(_)))));
    }
}
