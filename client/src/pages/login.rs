//! Login page: username + password, stores the session on success.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(any(test, feature = "csr"))]
use session::SessionError;
use session::Credentials;

#[cfg(feature = "csr")]
use crate::net::api::AppClient;

fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials::new(username, password))
}

#[cfg(any(test, feature = "csr"))]
fn login_failure_message(err: &SessionError) -> String {
    match err {
        SessionError::Rejected | SessionError::Status { status: 401 } => "Invalid username or password.".to_owned(),
        SessionError::Transport(_) => "Could not reach the server. Try again.".to_owned(),
        other => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let client = expect_context::<AppClient>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.login(&credentials).await {
                    Ok(_) => crate::util::auth::assign_location("/"),
                    Err(e) => {
                        info.set(login_failure_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Library"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a href="/signup" class="login-link">"Have an invite code? Create an account"</a>
            </div>
        </div>
    }
}
