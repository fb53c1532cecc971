//! Signup form and its local validation.
//!
//! The rules mirror what the backend enforces on `/user/signup`, so a form
//! that fails here would have been refused there anyway.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;

use serde::{Deserialize, Serialize};

const MAX_USERNAME_CHARS: usize = 60;
const MAX_CODE_CHARS: usize = 36;
const MIN_PASSWORD_CHARS: usize = 8;

/// New-account request sent to `/user/signup`. `code` is an invite code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub code: String,
    pub password: String,
}

/// Per-field validation failures, in the order the fields appear on the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(&'static str, String)>);

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(name, _)| *name == field).map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl SignupForm {
    /// Check every field and report all failures at once.
    ///
    /// # Errors
    ///
    /// Returns the collected [`FormErrors`] when any field is invalid.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if self.username.trim().is_empty() {
            errors.push("username", "Username is required");
        } else if self.username.chars().count() > MAX_USERNAME_CHARS {
            errors.push("username", format!("Username cannot be longer than {MAX_USERNAME_CHARS} characters"));
        }

        if self.email.trim().is_empty() {
            errors.push("email", "Email is required");
        }

        if self.code.trim().is_empty() {
            errors.push("code", "Invite code is required");
        } else if self.code.chars().count() > MAX_CODE_CHARS {
            errors.push("code", format!("Invite code cannot be more than {MAX_CODE_CHARS} characters"));
        }

        if self.password.trim().is_empty() {
            errors.push("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push("password", format!("Password cannot be less than {MIN_PASSWORD_CHARS} characters"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
