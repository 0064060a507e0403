//! Output formatting for CLI display
//!
//! Helpers that turn paths, tags and titles into lines for the terminal.
//! In quiet mode every helper returns the bare value so output can be piped.

use colored::Colorize;
use std::path::Path;

/// Format a tag with the number of books carrying it
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        format!("{tag}\t{count}")
    } else {
        format!("  {} ({count} book(s))", tag.magenta())
    }
}

/// Format a bare tag
#[must_use]
pub fn tag(tag: &str, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {}", tag.magenta())
    }
}

/// Format a book path, optionally with its title
#[must_use]
pub fn book(path: &Path, title: Option<&str>, quiet: bool) -> String {
    let path_str = path.display().to_string();
    match (title, quiet) {
        (None, true) => path_str,
        (Some(title), true) => format!("{title}\t{path_str}"),
        (None, false) => format!("  {path_str}"),
        (Some(title), false) => format!("  {} {}", title.bold(), path_str.dimmed()),
    }
}

/// Format the tags written to a book
#[must_use]
pub fn tagged(path: &Path, tags: &[String]) -> String {
    format!(
        "{} {} [{}]",
        "✓".green(),
        path.display(),
        tags.join(", ").magenta()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_output_is_plain() {
        assert_eq!(tag_with_count("poetry", 3, true), "poetry\t3");
        assert_eq!(tag("poetry", true), "poetry");
        assert_eq!(book(Path::new("/b/x.epub"), None, true), "/b/x.epub");
        assert_eq!(
            book(Path::new("/b/x.epub"), Some("Odes"), true),
            "Odes\t/b/x.epub"
        );
    }

    #[test]
    fn test_verbose_output_contains_values() {
        colored::control::set_override(false);
        assert_eq!(tag_with_count("poetry", 3, false), "  poetry (3 book(s))");
        assert_eq!(book(Path::new("/b/x.epub"), None, false), "  /b/x.epub");
        assert_eq!(
            tagged(Path::new("/b/x.epub"), &["a".to_string(), "b".to_string()]),
            "✓ /b/x.epub [a, b]"
        );
    }
}
