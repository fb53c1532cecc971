use super::*;
use session::{SessionRecord, TokenStore};

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("library-cli-storage-{}", uuid::Uuid::new_v4()))
}

#[test]
fn missing_key_reads_none() {
    let storage = FileStorage::new(scratch_dir());
    assert_eq!(storage.get_item("user"), None);
}

#[test]
fn set_creates_directory_and_file() {
    let dir = scratch_dir();
    let storage = FileStorage::new(&dir);
    storage.set_item("user", r#"{"token":"t1"}"#).unwrap();
    assert!(dir.join("user.json").is_file());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
    assert_eq!(storage.get_item("user").as_deref(), Some(r#"{"token":"t1"}"#));
    fs::remove_dir_all(dir).unwrap();
}

#[cfg(unix)]
#[test]
fn written_files_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_dir();
    let storage = FileStorage::new(&dir);
    storage.set_item("user", r#"{"token":"secret"}"#).unwrap();
    storage.set_item("user", r#"{"token":"rotated"}"#).unwrap();

    let mode = fs::metadata(dir.join("user.json")).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
    assert_eq!(storage.get_item("user").as_deref(), Some(r#"{"token":"rotated"}"#));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn remove_is_idempotent() {
    let dir = scratch_dir();
    let storage = FileStorage::new(&dir);
    storage.set_item("user", "x").unwrap();
    storage.remove_item("user");
    storage.remove_item("user");
    assert_eq!(storage.get_item("user"), None);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn token_store_round_trips_through_files() {
    let dir = scratch_dir();
    let store = TokenStore::new(FileStorage::new(&dir));
    store.save(&SessionRecord::with_token("t1")).unwrap();

    let reopened = TokenStore::new(FileStorage::new(&dir));
    assert_eq!(reopened.bearer_token().as_deref(), Some("t1"));
    reopened.clear();
    assert_eq!(store.read(), None);
    fs::remove_dir_all(dir).unwrap();
}
