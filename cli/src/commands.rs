//! Command bodies. Each returns the text to print on success.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use session::guard::{self, GuardDecision};
use session::{Credentials, KeyValueStorage, SessionClient, SignupForm, Transport, UserStore};

use crate::error::CliError;

pub async fn login<T: Transport, S: KeyValueStorage>(
    client: &SessionClient<T, S>,
    credentials: &Credentials,
) -> Result<String, CliError> {
    client.login(credentials).await?;
    Ok(format!("logged in as {}", credentials.username))
}

pub async fn signup<T: Transport, S: KeyValueStorage>(
    client: &SessionClient<T, S>,
    form: &SignupForm,
) -> Result<String, CliError> {
    client.signup(form).await?;
    Ok(format!("account {} created; log in to continue", form.username))
}

pub fn logout<T: Transport, S: KeyValueStorage>(client: &SessionClient<T, S>) -> String {
    client.logout();
    "logged out".to_owned()
}

/// Report token validity, keeping "invalid" apart from "could not check".
pub async fn validate<T: Transport, S: KeyValueStorage>(client: &SessionClient<T, S>) -> Result<String, CliError> {
    let validity = client.validate().await?;
    if !validity.valid {
        return Err(CliError::InvalidToken);
    }
    Ok(format!("valid ({}s left)", validity.time_left))
}

/// Print the stored session record without contacting the server.
pub fn whoami<T: Transport, S: KeyValueStorage>(client: &SessionClient<T, S>) -> Result<String, CliError> {
    let record = client.store().read().ok_or(CliError::NotAuthenticated)?;
    Ok(serde_json::to_string_pretty(&record)?)
}

/// `Authorization` header lines for use with other tools.
pub fn header<T: Transport, S: KeyValueStorage>(client: &SessionClient<T, S>) -> String {
    client
        .store()
        .auth_header()
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Guarded user lookup, as the `/user/:username` route does it.
pub async fn user<T: Transport, S: KeyValueStorage>(
    client: &SessionClient<T, S>,
    username: &str,
) -> Result<String, CliError> {
    if let GuardDecision::Redirect(target) = guard::check(client).await {
        tracing::debug!(target, "guard refused user lookup");
        return Err(CliError::NotAuthenticated);
    }
    let mut store = UserStore::default();
    store.get_user(client, username).await?;
    Ok(serde_json::to_string_pretty(&store.user)?)
}
