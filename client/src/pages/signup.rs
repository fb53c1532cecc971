//! Signup page: invite-code account creation.
//!
//! The form is checked locally before anything is sent; the backend's answer
//! is shown either way, then a successful signup moves on to `/login`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use session::{SessionError, SignupForm};

#[cfg(feature = "csr")]
use crate::net::api::AppClient;

fn build_form(username: &str, email: &str, code: &str, password: &str) -> SignupForm {
    SignupForm {
        username: username.trim().to_owned(),
        email: email.trim().to_owned(),
        code: code.trim().to_owned(),
        password: password.to_owned(),
    }
}

fn signup_failure_message(err: &SessionError) -> String {
    match err {
        SessionError::InvalidForm(errors) => errors.iter().map(|(_, message)| message).collect::<Vec<_>>().join(". "),
        SessionError::Status { status: 400 } => "Signup refused. Check your invite code and details.".to_owned(),
        SessionError::Transport(_) => "Could not reach the server. Try again.".to_owned(),
        other => format!("Signup failed: {other}"),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
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
        let form = build_form(&username.get(), &email.get(), &code.get(), &password.get());
        if let Err(errors) = form.validate() {
            info.set(signup_failure_message(&SessionError::InvalidForm(errors)));
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.signup(&form).await {
                    Ok(()) => {
                        info.set("Account created. Redirecting to sign in...".to_owned());
                        crate::util::auth::assign_location(session::LOGIN_ROUTE);
                    }
                    Err(e) => {
                        info.set(signup_failure_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = form;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Library"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
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
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input login-input--code"
                        type="text"
                        maxlength="36"
                        placeholder="Invite code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a href="/login" class="login-link">"Already have an account? Sign in"</a>
            </div>
        </div>
    }
}
