use super::*;
use crate::storage::MemoryStorage;

fn store() -> TokenStore<MemoryStorage> {
    TokenStore::new(MemoryStorage::new())
}

// =============================================================
// save / read
// =============================================================

#[test]
fn read_empty_store_is_none() {
    assert_eq!(store().read(), None);
}

#[test]
fn save_then_read_returns_record() {
    let store = store();
    store.save(&SessionRecord::with_token("t1")).unwrap();
    assert_eq!(store.read(), Some(SessionRecord::with_token("t1")));
    assert_eq!(
        store.storage().get_item(SESSION_KEY).as_deref(),
        Some(r#"{"token":"t1"}"#)
    );
}

#[test]
fn save_overwrites_previous_record() {
    let store = store();
    store.save(&SessionRecord::with_token("old")).unwrap();
    store.save(&SessionRecord::with_token("new")).unwrap();
    assert_eq!(store.bearer_token().as_deref(), Some("new"));
}

#[test]
fn malformed_record_reads_as_none() {
    let store = store();
    store.storage().set_item(SESSION_KEY, "{not json").unwrap();
    assert_eq!(store.read(), None);
    assert!(store.auth_header().is_empty());
}

#[test]
fn non_object_record_reads_as_none() {
    let store = store();
    store.storage().set_item(SESSION_KEY, "\"{'error':'yes'}\"").unwrap();
    assert_eq!(store.read(), None);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_is_idempotent() {
    let store = store();
    store.save(&SessionRecord::with_token("t1")).unwrap();
    store.clear();
    assert_eq!(store.read(), None);
    store.clear();
    assert_eq!(store.read(), None);
}

// =============================================================
// auth_header
// =============================================================

#[test]
fn auth_header_empty_without_record() {
    assert!(store().auth_header().is_empty());
}

#[test]
fn auth_header_has_bearer_token() {
    let store = store();
    store.save(&SessionRecord::with_token("t1")).unwrap();
    let headers = store.auth_header();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer t1"));
}

#[test]
fn auth_header_empty_when_record_has_no_token() {
    let store = store();
    store.save(&SessionRecord::default()).unwrap();
    assert!(store.read().is_some());
    assert!(store.auth_header().is_empty());
}

#[test]
fn auth_header_empty_for_blank_token() {
    let store = store();
    store.save(&SessionRecord::with_token("")).unwrap();
    assert!(store.auth_header().is_empty());
}
