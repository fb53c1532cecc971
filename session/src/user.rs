//! Holder for the one user record shown on a profile page.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use crate::client::SessionClient;
use crate::error::SessionError;
use crate::storage::KeyValueStorage;
use crate::transport::Transport;
use crate::types::UserRecord;

/// The currently displayed user, plus fetch progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserStore {
    pub user: Option<UserRecord>,
    pub loading: bool,
}

impl UserStore {
    /// Replace the held record wholesale. Nothing of the previous one survives.
    pub fn set_user(&mut self, user: UserRecord) {
        self.user = Some(user);
    }

    /// Fetch `identifier` and replace the held record on success.
    ///
    /// On failure the held record is left as it was.
    ///
    /// # Errors
    ///
    /// Propagates the [`SessionError`] from the fetch; callers that treat
    /// the lookup as fire-and-forget may ignore it.
    pub async fn get_user<T: Transport, S: KeyValueStorage>(
        &mut self,
        client: &SessionClient<T, S>,
        identifier: &str,
    ) -> Result<(), SessionError> {
        self.loading = true;
        let result = client.fetch_user(identifier).await;
        self.loading = false;
        self.set_user(result?);
        Ok(())
    }
}
