//! Integration tests for shelfr
//!
//! These tests lay out temporary libraries on disk and run the complete
//! scan -> index -> filter workflows through the public API.

use shelfr::commands;
use shelfr::config::ShelfrConfig;
use shelfr::index::IndexBuilder;
use shelfr::scan::{self, ScanError};
use shelfr::tags::{self, MemoryStore, TagStore, UNTAGGED, XattrStore};
use shelfr::ui::{PickerEvent, PickerState};
use shelfr::title::FileNameTitles;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a book file
fn create_book(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"not really an epub").unwrap();
    path
}

/// Library with three books: philosophy / religion+philosophy / untagged
fn setup_library() -> (TempDir, MemoryStore, [PathBuf; 3]) {
    let dir = TempDir::new().unwrap();
    let f1 = create_book(dir.path(), "a/meditations.epub");
    let f2 = create_book(dir.path(), "b/confessions.epub");
    let f3 = create_book(dir.path(), "c/notes.epub");
    create_book(dir.path(), "c/cover.jpg");

    let store = MemoryStore::new();
    tags::write_tags(&store, &f1, &["philosophy"]).unwrap();
    tags::write_tags(&store, &f2, &["religion", "philosophy"]).unwrap();

    (dir, store, [f1, f2, f3])
}

#[test]
fn test_scan_build_filter_workflow() {
    let (dir, store, [f1, f2, f3]) = setup_library();

    let index = IndexBuilder::new(dir.path(), ".epub", &store).build().unwrap();

    assert_eq!(index.files(), &[f1.clone(), f2.clone(), f3.clone()]);
    assert_eq!(index.unique_tags(), vec!["philosophy", "religion", UNTAGGED]);
    assert_eq!(index.files_for(UNTAGGED), &[f3]);

    let mut hits = index.filter(&["philosophy".to_string()]);
    hits.sort();
    assert_eq!(hits, vec![f1, f2.clone()]);

    let hits = index.filter(&["religion".to_string(), "philosophy".to_string()]);
    assert_eq!(hits, vec![f2]);

    assert!(index.filter(&[]).is_empty());
}

#[test]
fn test_tag_command_then_rescan() {
    let (dir, store, [_, _, f3]) = setup_library();
    let config = ShelfrConfig {
        ebook_dir: dir.path().to_path_buf(),
        ..ShelfrConfig::default()
    };

    commands::tag(&store, &f3, &["philosophy".to_string()], true, true).unwrap();

    let index = commands::load_index(&config, &store).unwrap();
    assert!(!index.has_untagged());
    assert_eq!(index.files_for("philosophy").len(), 3);
}

#[test]
fn test_picker_reducer_over_real_index() {
    let (dir, store, [f1, f2, f3]) = setup_library();
    let index = IndexBuilder::new(dir.path(), ".epub", &store).build().unwrap();

    let state = PickerState::new(&index, &FileNameTitles, 10, 10);
    assert_eq!(state.listed_paths(), vec![f1.clone(), f2.clone(), f3]);

    // philosophy is the first tag
    let state = state.reduce(PickerEvent::Toggle, &index, &FileNameTitles);
    assert_eq!(state.listed_paths(), vec![f1, f2.clone()]);

    let state = state
        .reduce(PickerEvent::Right, &index, &FileNameTitles)
        .reduce(PickerEvent::Toggle, &index, &FileNameTitles);
    assert_eq!(state.listed_paths(), vec![f2]);
    assert_eq!(state.entries[0].title, "confessions.epub");
}

#[test]
fn test_missing_library() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nowhere");

    assert!(matches!(
        scan::scan(&missing, ".epub"),
        Err(ScanError::RootNotFound(_))
    ));

    let store = MemoryStore::new();
    assert!(IndexBuilder::new(&missing, ".epub", &store).build().is_err());
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_aborts_scan_and_build() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, store, _) = setup_library();
    let locked = dir.path().join("d");
    create_book(dir.path(), "d/hidden.epub");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores directory permissions
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping: directory permissions are not enforced");
        return;
    }

    let scanned = scan::scan(dir.path(), ".epub");
    let built = IndexBuilder::new(dir.path(), ".epub", &store).build();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(scanned, Err(ScanError::Walk(_))));
    assert!(matches!(built, Err(ScanError::Walk(_))));
}

#[test]
fn test_real_xattr_round_trip() {
    let dir = TempDir::new().unwrap();
    let book = create_book(dir.path(), "book.epub");
    let store = XattrStore::default();

    // not every filesystem supports user attributes
    if store.set(&book, b"check").is_err() {
        eprintln!("skipping: extended attributes unsupported here");
        return;
    }

    tags::write_tags(&store, &book, &["history", "rome"]).unwrap();
    assert_eq!(tags::read_tags(&store, &book).unwrap(), vec!["history", "rome"]);

    let index = IndexBuilder::new(dir.path(), ".epub", &store).build().unwrap();
    assert_eq!(
        index.tags_for(&book),
        Some(&["history".to_string(), "rome".to_string()][..])
    );
}
