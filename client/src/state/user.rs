//! Reactive holder for the user shown on `/user/:username`.
//!
//! The record itself lives in a `session::UserStore` inside an `RwSignal`
//! provided by the root component.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use session::{SessionError, UserRecord, UserStore};

use crate::net::api::AppClient;

/// Fold a finished fetch into the store: replace on success, keep on failure.
pub fn apply_fetch(store: &mut UserStore, result: Result<UserRecord, SessionError>) {
    store.loading = false;
    if let Ok(user) = result {
        store.set_user(user);
    }
}

/// Fetch `username` and update `users`. Fire-and-forget: failures are
/// logged by the session client and leave the shown record in place.
pub async fn load_user(users: RwSignal<UserStore>, client: AppClient, username: String) {
    users.update(|store| store.loading = true);
    let result = client.fetch_user(&username).await;
    users.update(|store| apply_fetch(store, result));
}
