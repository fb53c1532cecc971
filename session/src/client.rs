//! Session client: login, signup, logout, token validation, user lookup.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns a [`SessionError`] instead of swallowing it, and
//! logs the failure once here so callers may stay silent. A refused token
//! on `/token/validate` is `Ok(TokenValidity { valid: false, .. })`, which
//! keeps "invalid" apart from "could not check".

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::Value;

use crate::error::SessionError;
use crate::form::SignupForm;
use crate::storage::KeyValueStorage;
use crate::store::{Headers, TokenStore};
use crate::transport::Transport;
use crate::types::{Credentials, SessionRecord, TokenValidity, UserRecord};

pub const LOGIN_PATH: &str = "/user/login";
pub const SIGNUP_PATH: &str = "/user/signup";
pub const VALIDATE_PATH: &str = "/token/validate";

/// Everything but RFC 3986 unreserved characters is escaped in a segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encode `value` as a single path segment.
#[must_use]
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Path of the user lookup endpoint for `identifier`.
#[must_use]
pub fn user_path(identifier: &str) -> String {
    format!("/user/{}", encode_segment(identifier))
}

/// HTTP session operations over a transport and the token store.
#[derive(Clone, Debug)]
pub struct SessionClient<T, S> {
    transport: T,
    store: TokenStore<S>,
}

impl<T: Transport, S: KeyValueStorage> SessionClient<T, S> {
    pub fn new(transport: T, store: TokenStore<S>) -> Self {
        Self { transport, store }
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in and persist the returned session record.
    ///
    /// The store is written only after a response carrying a token arrives.
    ///
    /// # Errors
    ///
    /// [`SessionError::Rejected`] when the backend answers without a token;
    /// transport, status, decode, or storage errors otherwise.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionRecord, SessionError> {
        let result = self.try_login(credentials).await;
        match &result {
            Ok(_) => tracing::info!(username = %credentials.username, "logged in"),
            Err(e) => tracing::warn!(username = %credentials.username, error = %e, "login failed"),
        }
        result
    }

    async fn try_login(&self, credentials: &Credentials) -> Result<SessionRecord, SessionError> {
        let body = to_json(credentials)?;
        let resp = self.transport.post_json(LOGIN_PATH, &body, &Headers::new()).await?;
        if !resp.is_success() {
            return Err(SessionError::Status { status: resp.status });
        }

        // The backend reports bad credentials as a 200 with a bare string body.
        let value: Value = resp.json()?;
        if !value.is_object() {
            return Err(SessionError::Rejected);
        }
        let record: SessionRecord = serde_json::from_value(value).map_err(|e| SessionError::Decode(e.to_string()))?;
        if record.bearer().is_none() {
            return Err(SessionError::Rejected);
        }

        self.store.save(&record)?;
        Ok(record)
    }

    /// Drop the stored session.
    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("logged out");
    }

    /// Create an account. The form is validated locally before any request.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidForm`] for local validation failures,
    /// [`SessionError::Status`] when the backend refuses the signup, or a
    /// transport error.
    pub async fn signup(&self, form: &SignupForm) -> Result<(), SessionError> {
        let result = self.try_signup(form).await;
        match &result {
            Ok(()) => tracing::info!(username = %form.username, "signed up"),
            Err(e) => tracing::warn!(username = %form.username, error = %e, "signup failed"),
        }
        result
    }

    async fn try_signup(&self, form: &SignupForm) -> Result<(), SessionError> {
        form.validate().map_err(SessionError::InvalidForm)?;
        let body = to_json(form)?;
        let resp = self.transport.post_json(SIGNUP_PATH, &body, &Headers::new()).await?;
        if !resp.is_success() {
            return Err(SessionError::Status { status: resp.status });
        }
        Ok(())
    }

    /// Ask the backend whether the stored token is still valid.
    ///
    /// # Errors
    ///
    /// Transport, decode, or non-auth status failures. A 401/403 is not an
    /// error; it yields an invalid [`TokenValidity`].
    pub async fn validate(&self) -> Result<TokenValidity, SessionError> {
        let result = self.try_validate().await;
        match &result {
            Ok(validity) => tracing::debug!(valid = validity.valid, time_left = validity.time_left, "token checked"),
            Err(e) => tracing::warn!(error = %e, "token validation failed"),
        }
        result
    }

    async fn try_validate(&self) -> Result<TokenValidity, SessionError> {
        let resp = self.transport.get(VALIDATE_PATH, &self.store.auth_header()).await?;
        match resp.status {
            401 | 403 => Ok(TokenValidity::invalid()),
            _ if resp.is_success() => resp.json(),
            status => Err(SessionError::Status { status }),
        }
    }

    /// Fetch the display record for `identifier`.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidIdentifier`] for a blank identifier; transport,
    /// status, or decode failures otherwise.
    pub async fn fetch_user(&self, identifier: &str) -> Result<UserRecord, SessionError> {
        let result = self.try_fetch_user(identifier).await;
        if let Err(e) = &result {
            tracing::warn!(identifier, error = %e, "user fetch failed");
        }
        result
    }

    async fn try_fetch_user(&self, identifier: &str) -> Result<UserRecord, SessionError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(SessionError::InvalidIdentifier);
        }
        let resp = self.transport.get(&user_path(identifier), &self.store.auth_header()).await?;
        if !resp.is_success() {
            return Err(SessionError::Status { status: resp.status });
        }
        resp.json()
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, SessionError> {
    serde_json::to_value(body).map_err(|e| SessionError::Decode(e.to_string()))
}
