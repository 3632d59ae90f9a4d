// Record manager running on a real store file.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::record_management::{RecordManager, RecordUpdate};
use crate::storage::file_storage::FileStorage;
use crate::storage::types::Record;

fn file_manager(dir: &TempDir) -> (RecordManager, PathBuf) {
    let path = dir.path().join("records.jsonl");
    (RecordManager::new(Box::new(FileStorage::new(&path))), path)
}

fn seed(manager: &RecordManager, records: &[Record]) {
    for r in records {
        manager.add(r).unwrap();
    }
}

#[test]
fn test_delete_all_case_insensitive_matches_on_disk() {
    let dir = TempDir::new().unwrap();
    let (manager, path) = file_manager(&dir);
    seed(
        &manager,
        &[
            Record::new("Ana", "1", "a@x.com"),
            Record::new("Bob", "2", "b@x.com"),
            Record::new("ana", "3", "c@x.com"),
        ],
    );

    assert_eq!(manager.delete_by_name("ANA").unwrap(), 2);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\"name\":\"Bob\",\"age\":\"2\",\"email\":\"b@x.com\"}\n"
    );
}

#[test]
fn test_modify_first_match_on_disk() {
    let dir = TempDir::new().unwrap();
    let (manager, _) = file_manager(&dir);
    seed(
        &manager,
        &[Record::new("X", "1", "x@x.com"), Record::new("x", "2", "y@x.com")],
    );

    manager
        .modify_by_name("X", |_| {
            Ok(RecordUpdate::from_input(String::new(), "9".into(), String::new()))
        })
        .unwrap();

    let all = manager.list_all().unwrap();
    assert_eq!(all[0], Record::new("X", "9", "x@x.com"));
    assert_eq!(all[1], Record::new("x", "2", "y@x.com"));
}

#[test]
fn test_delete_not_found_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let (manager, path) = file_manager(&dir);
    fs::write(&path, "[]\n").unwrap();

    assert_eq!(manager.delete_by_name("Nobody").unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
}

#[test]
fn test_rewrite_keeps_unknown_keys_and_numeric_age() {
    let dir = TempDir::new().unwrap();
    let (manager, path) = file_manager(&dir);
    fs::write(
        &path,
        concat!(
            r#"{"name":"Old","age":70,"email":"o@x.com","phone":"555"}"#,
            "\n",
            r#"{"name":"Gone","age":"1","email":"g@x.com"}"#,
            "\n"
        ),
    )
    .unwrap();

    manager.delete_by_name("gone").unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\"name\":\"Old\",\"age\":70,\"email\":\"o@x.com\",\"phone\":\"555\"}\n"
    );
}

#[test]
fn test_find_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let (manager, path) = file_manager(&dir);
    assert!(manager.find_by_name("Nobody").unwrap().is_empty());
    assert!(!path.exists());
}
