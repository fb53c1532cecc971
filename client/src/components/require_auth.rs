//! Wrapper that renders its children only after the guard allows entry.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::api::AppClient;
use crate::state::auth::{AuthState, GuardStatus};

/// Text shown in place of a protected page while it is not yet allowed.
pub fn placeholder_text(status: GuardStatus) -> &'static str {
    match status {
        GuardStatus::Checking | GuardStatus::Allowed => "Checking session...",
        GuardStatus::Redirecting => "Redirecting to login...",
    }
}

/// Guarded route body. Runs the guard on mount and again whenever the path
/// changes underneath it (e.g. `/user/a` to `/user/b`, which reuses the view).
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<AppClient>();
    let location = use_location();

    Effect::new(move || {
        location.pathname.track();
        auth.update(AuthState::begin_check);
        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                crate::util::auth::run_guard(auth, client).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &client;
        }
    });

    view! {
        <Show
            when=move || auth.get().is_allowed()
            fallback=move || view! { <p class="guard-pending">{placeholder_text(auth.get().status)}</p> }
        >
            {children()}
        </Show>
    }
}
