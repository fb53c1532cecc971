use super::*;
use crate::test_helpers::{MockTransport, client_with};
use crate::types::Review;

fn green() -> UserRecord {
    UserRecord {
        username: "green".to_owned(),
        role: "guy".to_owned(),
        reviews: vec![Review { username: "yoyo".to_owned(), ..Review::default() }],
    }
}

#[test]
fn default_store_holds_nothing() {
    let store = UserStore::default();
    assert!(store.user.is_none());
    assert!(!store.loading);
}

#[tokio::test]
async fn get_user_replaces_record_entirely() {
    let client = client_with(MockTransport::replying(200, r#"{"Username":"alice","Role":"writer"}"#));
    let mut store = UserStore { user: Some(green()), loading: false };

    store.get_user(&client, "alice").await.unwrap();

    let user = store.user.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.role, "writer");
    assert!(user.reviews.is_empty(), "reviews from the previous record must not survive");
    assert!(!store.loading);
}

#[tokio::test]
async fn get_user_failure_keeps_previous_record() {
    let client = client_with(MockTransport::replying(404, ""));
    let mut store = UserStore { user: Some(green()), loading: false };

    let err = store.get_user(&client, "ghost").await.unwrap_err();

    assert_eq!(err, SessionError::Status { status: 404 });
    assert_eq!(store.user, Some(green()));
    assert!(!store.loading);
}

#[test]
fn set_user_overwrites() {
    let mut store = UserStore::default();
    store.set_user(green());
    store.set_user(UserRecord::default());
    assert_eq!(store.user, Some(UserRecord::default()));
}
