//! Token store: the single persisted session record.
//!
//! The record lives as JSON text under [`SESSION_KEY`]. Only `save` and
//! `clear` mutate it; everything else reads.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;

use crate::error::SessionError;
use crate::storage::KeyValueStorage;
use crate::types::SessionRecord;

/// Storage key holding the serialized session record.
pub const SESSION_KEY: &str = "user";

/// Header name to header value, as attached to outgoing requests.
pub type Headers = BTreeMap<String, String>;

/// Owner of the persisted session record.
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Serialize `record` and overwrite whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Decode`] if the record cannot be serialized
    /// and [`SessionError::Storage`] if the backend refuses the write.
    pub fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record).map_err(|e| SessionError::Decode(e.to_string()))?;
        self.storage.set_item(SESSION_KEY, &raw)
    }

    /// Remove the stored record. Safe to call when nothing is stored.
    pub fn clear(&self) {
        self.storage.remove_item(SESSION_KEY);
    }

    /// The stored record, or `None` when missing or malformed.
    pub fn read(&self) -> Option<SessionRecord> {
        let raw = self.storage.get_item(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed session record");
                None
            }
        }
    }

    /// The stored token when present and non-empty.
    pub fn bearer_token(&self) -> Option<String> {
        self.read()?.bearer().map(str::to_owned)
    }

    /// `Authorization: Bearer <token>` when a token is stored, else empty.
    pub fn auth_header(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(token) = self.bearer_token() {
            headers.insert("Authorization".to_owned(), format!("Bearer {token}"));
        }
        headers
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
