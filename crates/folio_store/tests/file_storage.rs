use std::fs;
use std::sync::Arc;

use folio_store::{FileStorage, Preferences, Storage, StorageError};
use pretty_assertions::assert_eq;

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("prefs.json"));
    assert_eq!(storage.get_item("language").unwrap(), None);
}

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    {
        let storage = FileStorage::new(&path);
        storage.set_item("language", "bg").unwrap();
        storage.set_item("theme", "light").unwrap();
    }

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get_item("language").unwrap().as_deref(), Some("bg"));
    assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn file_is_a_flat_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let storage = FileStorage::new(&path);
    storage.set_item("language", "en").unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "language": "en" }));
}

#[test]
fn corrupt_file_is_an_error_for_the_medium_and_absent_for_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{ not json").unwrap();

    let storage = Arc::new(FileStorage::new(&path));
    assert!(matches!(
        storage.get_item("language"),
        Err(StorageError::Corrupt { .. })
    ));

    let prefs = Preferences::new(storage);
    assert_eq!(prefs.read("language"), None);
    // Writing cannot repair the file without discarding it, so it is skipped.
    prefs.write("language", "bg");
    assert_eq!(prefs.read("language"), None);
}
