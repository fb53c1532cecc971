//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use session::UserStore;

use crate::components::require_auth::RequireAuth;
use crate::net::api::app_client;
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage, user::UserPage};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the session client and shared state, and wraps the protected
/// routes in the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let users = RwSignal::new(UserStore::default());

    provide_context(auth);
    provide_context(users);
    provide_context(app_client());

    view! {
        <Stylesheet id="leptos" href="/pkg/library.css"/>
        <Title text="Library"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><HomePage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("user"), ParamSegment("username"))
                    view=|| view! { <RequireAuth><UserPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
