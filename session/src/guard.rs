//! Navigation guard for protected routes.
//!
//! [`evaluate`] is a pure decision over a validation outcome; [`check`]
//! runs the validation round trip first. Performing the redirect is left to
//! whichever router sits on top (a page load in the browser, an exit status
//! in the cli). Nothing is cached: each protected navigation checks again.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::client::SessionClient;
use crate::error::SessionError;
use crate::storage::KeyValueStorage;
use crate::transport::Transport;
use crate::types::TokenValidity;

/// Where unauthenticated visitors are sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Redirect target, if any.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::Redirect(target) => Some(target),
        }
    }
}

/// Allow only an affirmative validity; everything else goes to login.
#[must_use]
pub fn evaluate(outcome: &Result<TokenValidity, SessionError>) -> GuardDecision {
    match outcome {
        Ok(validity) if validity.valid => GuardDecision::Allow,
        _ => GuardDecision::Redirect(LOGIN_ROUTE),
    }
}

/// Validate the stored token and decide.
///
/// With no token stored there is nothing to validate, so the visitor is
/// redirected without a request.
pub async fn check<T: Transport, S: KeyValueStorage>(client: &SessionClient<T, S>) -> GuardDecision {
    if client.store().bearer_token().is_none() {
        tracing::debug!("no stored token; redirecting to login");
        return GuardDecision::Redirect(LOGIN_ROUTE);
    }
    let decision = evaluate(&client.validate().await);
    tracing::debug!(?decision, "guard evaluated");
    decision
}
