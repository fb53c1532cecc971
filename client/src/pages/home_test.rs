use super::*;

#[test]
fn user_page_path_trims_name() {
    assert_eq!(user_page_path("  yoyo "), Some("/user/yoyo".to_owned()));
}

#[test]
fn user_page_path_rejects_blank() {
    assert_eq!(user_page_path(""), None);
    assert_eq!(user_page_path("   "), None);
}

#[test]
fn user_page_path_escapes_reserved_characters() {
    assert_eq!(user_page_path("a/b?c=d#e"), Some("/user/a%2Fb%3Fc%3Dd%23e".to_owned()));
    assert_eq!(user_page_path(" jo smith "), Some("/user/jo%20smith".to_owned()));
}
