//! Session token management.
//!
//! Tokens are opaque 32-byte hex strings handed out at login and presented as
//! `Authorization: Bearer <token>`. They live until logout or process exit.

use std::fmt::Write;

use rand::Rng;
use uuid::Uuid;

use crate::state::{AppState, StoredUser};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for the given user, returning the token.
pub async fn create_session(state: &AppState, user_id: Uuid) -> String {
    let token = generate_token();
    state.sessions.write().await.insert(token.clone(), user_id);
    token
}

/// Resolve a session token to its user.
pub async fn validate_session(state: &AppState, token: &str) -> Option<StoredUser> {
    let user_id = *state.sessions.read().await.get(token)?;
    state.users.read().await.get(&user_id).cloned()
}

/// Delete a session by token. Returns whether it existed.
pub async fn delete_session(state: &AppState, token: &str) -> bool {
    state.sessions.write().await.remove(token).is_some()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
