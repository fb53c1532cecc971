use super::*;
use serde_json::json;

#[test]
fn session_record_keeps_extra_login_fields() {
    let record: SessionRecord = serde_json::from_value(json!({
        "token": "t1",
        "username": "alice",
        "expires": 86400
    }))
    .unwrap();
    assert_eq!(record.token.as_deref(), Some("t1"));
    assert_eq!(record.extra.get("username"), Some(&json!("alice")));

    let back = serde_json::to_value(&record).unwrap();
    assert_eq!(back, json!({ "token": "t1", "username": "alice", "expires": 86400 }));
}

#[test]
fn session_record_without_token_omits_field() {
    let record = SessionRecord::default();
    assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
}

#[test]
fn bearer_ignores_empty_token() {
    assert_eq!(SessionRecord::with_token("").bearer(), None);
    assert_eq!(SessionRecord::with_token("abc").bearer(), Some("abc"));
}

#[test]
fn token_validity_time_left_defaults_to_zero() {
    let validity: TokenValidity = serde_json::from_str(r#"{"valid":true}"#).unwrap();
    assert!(validity.valid);
    assert_eq!(validity.time_left, 0);
}

#[test]
fn user_record_reads_pascal_case_keys() {
    let user: UserRecord = serde_json::from_value(json!({
        "Username": "green",
        "Role": "reader",
        "Reviews": [
            { "Username": "yoyo", "BookID": "b-1", "Rating": "5", "Review": "great" },
            { "Username": "zed" }
        ]
    }))
    .unwrap();
    assert_eq!(user.username, "green");
    assert_eq!(user.role, "reader");
    assert_eq!(user.reviews.len(), 2);
    assert_eq!(user.reviews[0].book_id, "b-1");
    assert_eq!(user.reviews[1].username, "zed");
    assert!(user.reviews[1].rating.is_empty());
}

#[test]
fn user_record_missing_fields_default() {
    let user: UserRecord = serde_json::from_str("{}").unwrap();
    assert_eq!(user, UserRecord::default());
}

#[test]
fn credentials_serialize_lowercase() {
    let value = serde_json::to_value(Credentials::new("a", "b")).unwrap();
    assert_eq!(value, json!({ "username": "a", "password": "b" }));
}
