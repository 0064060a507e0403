//! Demo showing a library indexed through the in-memory tag store
//!
//! Lays out a small library in a temporary directory, tags the books in a
//! `MemoryStore` instead of real extended attributes, then lists the tags
//! and runs a few multi-tag filters over the index.
//!
//! Run with:
//! ```bash
//! cargo run --example library_demo
//! ```

use shelfr::index::IndexBuilder;
use shelfr::tags::{self, MemoryStore};
use std::fs;
use tempfile::TempDir;

fn main() {
    println!("=== Shelfr Library Demo ===\n");

    let library = TempDir::new().expect("Failed to create library directory");
    let store = MemoryStore::new();

    let books = [
        ("stoics/meditations.epub", Some("philosophy,classics")),
        ("stoics/letters.epub", Some("philosophy,classics,unread")),
        ("church/confessions.epub", Some("religion,philosophy")),
        ("church/orthodoxy.epub", Some("religion,unread")),
        ("misc/notes.epub", None),
    ];

    for (name, raw) in books {
        let path = library.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create shelf");
        }
        fs::write(&path, b"demo").expect("Failed to write book");
        if let Some(raw) = raw {
            let tags = tags::parse_tags(raw);
            tags::write_tags(&store, &path, &tags).expect("Failed to tag book");
        }
    }
    fs::write(library.path().join("misc/cover.jpg"), b"demo").expect("Failed to write cover");

    let index = IndexBuilder::new(library.path(), ".epub", &store)
        .build()
        .expect("Failed to index library");

    println!("Indexed {} books\n", index.len());

    println!("Available tags:");
    for tag in index.unique_tags() {
        println!("  - {} ({} books)", tag, index.files_for(&tag).len());
    }

    for selection in [
        vec!["philosophy"],
        vec!["philosophy", "religion"],
        vec!["unread", "classics"],
        vec!["religion", "classics"],
    ] {
        let selected: Vec<String> = selection.iter().map(ToString::to_string).collect();
        let hits = index.listing(&selected);

        println!("\n[{}] -> {} books", selection.join(", "), hits.len());
        for path in hits {
            let shown = path.strip_prefix(library.path()).unwrap_or(&path);
            println!("  {}", shown.display());
        }
    }
}
