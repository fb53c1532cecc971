use super::*;
use session::Review;

fn record(name: &str, reviews: usize) -> UserRecord {
    UserRecord {
        username: name.to_owned(),
        role: "reader".to_owned(),
        reviews: (0..reviews)
            .map(|i| Review { username: name.to_owned(), book_id: format!("b{i}"), ..Review::default() })
            .collect(),
    }
}

#[test]
fn successful_fetch_replaces_record() {
    let mut store = UserStore { user: Some(record("green", 3)), loading: true };
    apply_fetch(&mut store, Ok(record("alice", 0)));
    assert_eq!(store.user, Some(record("alice", 0)));
    assert!(!store.loading);
}

#[test]
fn failed_fetch_keeps_record_and_clears_loading() {
    let mut store = UserStore { user: Some(record("green", 1)), loading: true };
    apply_fetch(&mut store, Err(SessionError::Status { status: 404 }));
    assert_eq!(store.user, Some(record("green", 1)));
    assert!(!store.loading);
}
