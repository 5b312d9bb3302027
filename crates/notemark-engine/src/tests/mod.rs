use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::io::NoteStore;

/// Create a note store in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn create_test_store() -> (TempDir, NoteStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = NoteStore::open(dir.path()).unwrap();
    (dir, store)
}

/// Write a note file by hand, bypassing serialization.
pub fn write_raw_note(store: &NoteStore, id: &str, text: &str) -> PathBuf {
    let path = store.root().join(format!("{id}.{}", NoteStore::EXTENSION));
    fs::write(&path, text).unwrap();
    path
}
