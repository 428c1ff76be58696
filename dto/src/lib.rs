//! Shared wire types for the user API.
//!
//! This crate owns the request/response shapes used by the backend, the
//! session client, and the CLI. Creation payloads are validated here so every
//! consumer reports the same field-level violations.

pub mod email;
pub mod user;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use email::is_email;
pub use user::{Constraint, CreateUserDto, FieldViolation, ValidationErrors, create_user_schema, validate_create_user};

/// Public view of a user account, returned by `POST /v1/users` and
/// `GET /v1/users/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_active: bool,
}

/// Body of `POST /v1/auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
