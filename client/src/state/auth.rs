//! Guard state for the current protected navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the `RequireAuth` wrapper while it validates the stored token;
//! read by guarded views to decide between the placeholder and the page.
//! Reset to `Checking` on every protected navigation, never cached.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::GuardDecision;

/// Where the guard stands for the route being entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardStatus {
    #[default]
    Checking,
    Allowed,
    Redirecting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: GuardStatus,
}

impl AuthState {
    /// Start a fresh check for a new navigation.
    pub fn begin_check(&mut self) {
        self.status = GuardStatus::Checking;
    }

    /// Record the guard's decision.
    pub fn resolve(&mut self, decision: GuardDecision) {
        self.status = match decision {
            GuardDecision::Allow => GuardStatus::Allowed,
            GuardDecision::Redirect(_) => GuardStatus::Redirecting,
        };
    }

    #[must_use]
    pub fn is_allowed(&self) -> bool {
        self.status == GuardStatus::Allowed
    }
}
