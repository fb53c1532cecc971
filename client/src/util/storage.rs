//! `localStorage` adapter for the session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's storage is the only persistence the front end has; this
//! type lets the `session` core use it without touching `web-sys` itself.
//!
//! TRADE-OFFS
//! ==========
//! Reads are best-effort: a blocked or missing `localStorage` reads as
//! empty. Native (non-csr) builds behave as an always-empty store that
//! refuses writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{KeyValueStorage, SessionError};

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn unavailable() -> SessionError {
    SessionError::Storage("localStorage unavailable".to_owned())
}

/// Handle to `window.localStorage`. Zero-sized; every call looks it up.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            let storage = browser_storage().ok_or_else(unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| SessionError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = browser_storage() {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("localStorage remove failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
