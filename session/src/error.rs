//! Error type shared by every session operation.

use crate::form::FormErrors;

/// Errors produced by token storage and session client operations.
///
/// Transport and status failures mean "could not check"; [`Rejected`] means
/// the backend answered but refused the request.
///
/// [`Rejected`]: SessionError::Rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// A response body or stored record could not be (de)serialized.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The persistent key/value backend refused a write.
    #[error("storage failed: {0}")]
    Storage(String),

    /// The backend accepted the login request but issued no token.
    #[error("login rejected: no token in response")]
    Rejected,

    /// Signup input failed local validation; no request was sent.
    #[error("invalid signup form: {0}")]
    InvalidForm(FormErrors),

    /// A user identifier was empty or blank.
    #[error("invalid user identifier")]
    InvalidIdentifier,
}

impl SessionError {
    /// True when the failure says nothing about the credentials themselves.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { status: 500..=599 })
    }
}
