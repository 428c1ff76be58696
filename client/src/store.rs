//! Profile store holding the current user for this session.
//!
//! The profile is kept as loosely typed JSON; [`MeStore::profile`] offers a
//! typed view when the backend shape is known. Overlapping
//! [`MeStore::get_profile`] calls are not coordinated: whichever settles last
//! wins.

use parking_lot::RwLock;
use serde_json::Value;

use crate::fetch::FetchClient;

pub const PROFILE_ENDPOINT: &str = "/v1/users/profile";

pub struct MeStore {
    client: FetchClient,
    user: RwLock<Option<Value>>,
}

impl MeStore {
    #[must_use]
    pub fn new(client: FetchClient) -> Self {
        Self { client, user: RwLock::new(None) }
    }

    /// Fetch the profile and cache it. Any failure, including a swallowed
    /// 401/403, leaves no cached user; errors never reach the caller.
    pub async fn get_profile(&self) {
        let user = match self.client.get(PROFILE_ENDPOINT, None).await {
            Ok(user) => user,
            Err(e) => {
                tracing::debug!(error = %e, "profile fetch failed");
                None
            }
        };
        *self.user.write() = user;
    }

    /// Overwrite the cached user without validation.
    pub fn set_data(&self, data: Option<Value>) {
        *self.user.write() = data;
    }

    pub fn clear(&self) {
        *self.user.write() = None;
    }

    #[must_use]
    pub fn user(&self) -> Option<Value> {
        self.user.read().clone()
    }

    #[must_use]
    pub fn has_user(&self) -> bool {
        self.user.read().is_some()
    }

    /// Cached user decoded as a [`dto::UserProfile`], if it has that shape.
    #[must_use]
    pub fn profile(&self) -> Option<dto::UserProfile> {
        let user = self.user()?;
        match serde_json::from_value(user) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::debug!(error = %e, "cached user is not a UserProfile");
                None
            }
        }
    }
}
