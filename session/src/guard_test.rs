use super::*;
use crate::test_helpers::{MockTransport, client_with};
use crate::types::SessionRecord;

// =============================================================
// evaluate
// =============================================================

#[test]
fn valid_token_allows() {
    let outcome = Ok(TokenValidity { valid: true, time_left: 60 });
    assert_eq!(evaluate(&outcome), GuardDecision::Allow);
}

#[test]
fn invalid_token_redirects_to_login() {
    let outcome = Ok(TokenValidity::invalid());
    assert_eq!(evaluate(&outcome), GuardDecision::Redirect("/login"));
}

#[test]
fn transport_error_redirects() {
    let outcome = Err(SessionError::Transport("offline".to_owned()));
    assert_eq!(evaluate(&outcome), GuardDecision::Redirect(LOGIN_ROUTE));
}

#[test]
fn status_error_redirects() {
    let outcome = Err(SessionError::Status { status: 500 });
    assert_eq!(evaluate(&outcome).redirect_target(), Some("/login"));
}

#[test]
fn allow_has_no_redirect_target() {
    assert!(GuardDecision::Allow.is_allowed());
    assert_eq!(GuardDecision::Allow.redirect_target(), None);
    assert!(!GuardDecision::Redirect(LOGIN_ROUTE).is_allowed());
}

// =============================================================
// check
// =============================================================

#[tokio::test]
async fn check_allows_when_backend_says_valid() {
    let client = client_with(MockTransport::replying(200, r#"{"valid":true,"time_left":30}"#));
    client.store().save(&SessionRecord::with_token("t1")).unwrap();
    assert_eq!(check(&client).await, GuardDecision::Allow);
    assert_eq!(client.transport().request_count(), 1);
}

#[tokio::test]
async fn check_redirects_when_backend_says_invalid() {
    let client = client_with(MockTransport::replying(401, ""));
    client.store().save(&SessionRecord::with_token("expired")).unwrap();
    assert_eq!(check(&client).await, GuardDecision::Redirect(LOGIN_ROUTE));
}

#[tokio::test]
async fn check_redirects_when_validation_cannot_run() {
    let client = client_with(MockTransport::failing("offline"));
    client.store().save(&SessionRecord::with_token("t1")).unwrap();
    assert_eq!(check(&client).await, GuardDecision::Redirect(LOGIN_ROUTE));
}

#[tokio::test]
async fn check_without_token_skips_request() {
    let client = client_with(MockTransport::default());
    assert_eq!(check(&client).await, GuardDecision::Redirect(LOGIN_ROUTE));
    assert_eq!(client.transport().request_count(), 0);
}

#[tokio::test]
async fn check_revalidates_every_navigation() {
    let client = client_with(MockTransport::new(vec![
        Ok(crate::transport::HttpResponse::new(200, r#"{"valid":true}"#)),
        Ok(crate::transport::HttpResponse::new(401, "")),
    ]));
    client.store().save(&SessionRecord::with_token("t1")).unwrap();
    assert_eq!(check(&client).await, GuardDecision::Allow);
    assert_eq!(check(&client).await, GuardDecision::Redirect(LOGIN_ROUTE));
    assert_eq!(client.transport().request_count(), 2);
}
