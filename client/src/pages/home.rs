//! Home page: greeting, user lookup, and logout.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::api::AppClient;
use crate::util::auth::{assign_location, replace_location};

/// Route for a user's profile, or `None` for a blank lookup. The name is
/// escaped so it always lands in the `:username` segment.
pub fn user_page_path(username: &str) -> Option<String> {
    let username = username.trim();
    if username.is_empty() {
        return None;
    }
    Some(format!("/user/{}", session::encode_segment(username)))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let lookup = RwSignal::new(String::new());

    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(path) = user_page_path(&lookup.get()) {
            assign_location(&path);
        }
    };

    let on_logout = move |_| {
        client.logout();
        replace_location(session::LOGIN_ROUTE);
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Library"</h1>
                <button class="btn" on:click=on_logout title="Sign out">
                    "Logout"
                </button>
            </header>
            <p>"Welcome back. Look up a reader to see their reviews."</p>
            <form class="lookup-form" on:submit=on_lookup>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || lookup.get()
                    on:input=move |ev| lookup.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit">
                    "View profile"
                </button>
            </form>
        </div>
    }
}
