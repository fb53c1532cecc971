//! Shared auth navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and the login/logout flows all leave the page the same
//! way: a full location change, so no stale view survives a session change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::GuardDecision;
use session::guard;

use crate::net::api::AppClient;
use crate::state::auth::AuthState;

/// Check the stored token for this navigation and act on the decision.
///
/// A redirect replaces the current history entry, so "back" does not return
/// to the protected page.
pub async fn run_guard(auth: RwSignal<AuthState>, client: AppClient) -> GuardDecision {
    auth.update(AuthState::begin_check);
    let decision = guard::check(&client).await;
    auth.update(|state| state.resolve(decision));
    if let Some(target) = decision.redirect_target() {
        replace_location(target);
    }
    decision
}

/// Full-page navigation that replaces the current history entry.
pub fn replace_location(target: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().replace(target) {
                log::warn!("redirect to {target} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
    }
}

/// Full-page navigation that keeps the current page in history.
pub fn assign_location(target: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(target) {
                log::warn!("navigation to {target} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
    }
}
