//! HTTP seam between the session client and a concrete HTTP stack.
//!
//! The trait is `?Send` so browser futures (`gloo-net`) satisfy it; native
//! callers simply await on the current task.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SessionError;
use crate::store::Headers;

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SessionError> {
        serde_json::from_str(&self.body).map_err(|e| SessionError::Decode(e.to_string()))
    }
}

/// Minimal HTTP client used by [`SessionClient`](crate::SessionClient).
///
/// Implementations return `Ok` for any response that arrived, whatever its
/// status; `Err` is reserved for requests that never completed.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// `GET path` with the given headers.
    async fn get(&self, path: &str, headers: &Headers) -> Result<HttpResponse, SessionError>;

    /// `POST path` with a JSON body and the given headers.
    async fn post_json(&self, path: &str, body: &Value, headers: &Headers) -> Result<HttpResponse, SessionError>;
}
