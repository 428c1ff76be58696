//! Account creation and credential checks.

use dto::{CreateUserDto, UserProfile};
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::session::bytes_to_hex;
use crate::state::{AppState, StoredUser};

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("email already registered")]
    EmailTaken,
}

#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Register a validated account. New accounts are active unless the payload
/// says otherwise.
pub async fn create_user(state: &AppState, dto: CreateUserDto) -> Result<UserProfile, UserError> {
    let email = normalize_email(&dto.email);
    let mut users = state.users.write().await;
    if users.values().any(|u| u.email == email) {
        return Err(UserError::EmailTaken);
    }

    let password_salt = generate_salt();
    let password_hash = hash_password(&password_salt, &dto.password);
    let user = StoredUser {
        id: Uuid::new_v4(),
        email,
        name: dto.name,
        is_active: dto.is_active.unwrap_or(true),
        password_salt,
        password_hash,
    };
    let profile = user.profile();
    users.insert(user.id, user);
    tracing::info!(user_id = %profile.id, "user created");
    Ok(profile)
}

/// Check credentials, returning the matching user's id.
pub async fn authenticate(state: &AppState, email: &str, password: &str) -> Option<Uuid> {
    let email = normalize_email(email);
    let users = state.users.read().await;
    users
        .values()
        .find(|u| u.email == email)
        .filter(|u| hash_password(&u.password_salt, password) == u.password_hash)
        .map(|u| u.id)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
