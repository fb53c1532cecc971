//! Wire types exchanged with the library backend.
//!
//! DESIGN
//! ======
//! Login responses are kept opaque beyond `token` so the stored session
//! record round-trips whatever the backend sends. The user record keeps the
//! backend's PascalCase keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Username/password pair sent to `/user/login`. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

/// Persisted login response: the bearer token plus any other fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Remaining login-response fields, carried as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    /// Record holding only a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), extra: Map::new() }
    }

    /// The token when present and non-empty.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Response of `GET /token/validate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValidity {
    pub valid: bool,
    /// Seconds until the token expires.
    #[serde(default)]
    pub time_left: i64,
}

impl TokenValidity {
    #[must_use]
    pub fn invalid() -> Self {
        Self { valid: false, time_left: 0 }
    }
}

/// A user as displayed on `/user/:username`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserRecord {
    pub username: String,
    pub role: String,
    pub reviews: Vec<Review>,
}

/// One review authored by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Review {
    pub username: String,
    #[serde(rename = "BookID")]
    pub book_id: String,
    pub rating: String,
    pub review: String,
}
