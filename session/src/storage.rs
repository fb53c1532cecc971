//! Key/value persistence backends for the token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser uses `localStorage`, the cli a directory of files. Both sit
//! behind [`KeyValueStorage`], whose methods take `&self` like the browser
//! `Storage` API so handles can be cloned and shared freely.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::SessionError;

/// String key/value store with `localStorage` semantics.
pub trait KeyValueStorage {
    /// Current value for `key`, or `None` when absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str);
}

/// Process-local storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
