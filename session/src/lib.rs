//! Session core shared by the browser `client` and the native `cli`.
//!
//! This crate owns everything about "who is logged in" that does not depend
//! on where it runs: the wire types exchanged with the library backend, the
//! token store over a pluggable key/value backend, the HTTP transport seam,
//! the session client, the navigation guard decision, and the user store.
//!
//! ARCHITECTURE
//! ============
//! `storage` → `store` → `client` → (`guard`, `user`). Platform crates plug
//! in a [`KeyValueStorage`] (browser `localStorage`, files on disk) and a
//! [`Transport`] (`gloo-net`, `reqwest`); nothing here reaches for globals.

pub mod client;
pub mod error;
pub mod form;
pub mod guard;
pub mod storage;
pub mod store;
pub mod transport;
pub mod types;
pub mod user;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use client::{SessionClient, encode_segment};
pub use error::SessionError;
pub use form::{FormErrors, SignupForm};
pub use guard::{GuardDecision, LOGIN_ROUTE};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{Headers, SESSION_KEY, TokenStore};
pub use transport::{HttpResponse, Transport};
pub use types::{Credentials, Review, SessionRecord, TokenValidity, UserRecord};
pub use user::UserStore;
