//! User page: profile and reviews for `/user/:username`.
//!
//! DESIGN
//! ======
//! The route param drives a fetch into the shared `UserStore`. A failed fetch
//! leaves the previous record in the store, so the page only renders a record
//! whose username matches the param; anything else reads as loading or
//! not found.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use session::{UserRecord, UserStore};

use crate::components::review_list::ReviewList;
use crate::net::api::AppClient;

/// The stored record, only when it belongs to `requested`.
pub fn shown_user<'a>(store: &'a UserStore, requested: &str) -> Option<&'a UserRecord> {
    store.user.as_ref().filter(|user| user.username == requested)
}

/// Heading for the profile card.
pub fn profile_title(shown: Option<&UserRecord>, loading: bool) -> String {
    match shown {
        Some(user) => user.username.clone(),
        None if loading => "Loading...".to_owned(),
        None => "User not found".to_owned(),
    }
}

/// Role label, with a fallback for records that carry none.
pub fn role_label(user: &UserRecord) -> &str {
    if user.role.trim().is_empty() { "member" } else { user.role.as_str() }
}

#[component]
pub fn UserPage() -> impl IntoView {
    let users = expect_context::<RwSignal<UserStore>>();
    let client = expect_context::<AppClient>();
    let params = use_params_map();
    let last_requested = RwSignal::new(None::<String>);

    let username = move || params.read().get("username").unwrap_or_default();

    // Route changes do not remount the page; refetch when the param moves.
    Effect::new(move || {
        let next = username();
        if last_requested.get_untracked().as_deref() == Some(next.as_str()) {
            return;
        }
        last_requested.set(Some(next.clone()));
        users.update(|store| store.loading = true);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(crate::state::user::load_user(users, client, next));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, next);
        }
    });

    view! {
        <div class="user-page">
            <div class="user-card">
                <h1>
                    {move || {
                        let requested = username();
                        users.with(|store| profile_title(shown_user(store, &requested), store.loading))
                    }}
                </h1>
                {move || {
                    let requested = username();
                    users
                        .with(|store| shown_user(store, &requested).cloned())
                        .map(|user| {
                            let role = role_label(&user).to_owned();
                            view! {
                                <p class="user-card__role">"Role: " {role}</p>
                                <h2>"Reviews"</h2>
                                <ReviewList reviews=user.reviews.clone() />
                            }
                        })
                }}
                <a href="/" class="login-link">"Back to home"</a>
            </div>
        </div>
    }
}
