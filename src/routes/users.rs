//! User account routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dto::{CreateUserDto, UserProfile};
use serde_json::{Value, json};

use super::auth::AuthUser;
use crate::extract::ValidatedJson;
use crate::services::users::{self, UserError};
use crate::state::AppState;

/// `POST /v1/users`: register an account from a validated payload.
pub async fn create_user(State(state): State<AppState>, ValidatedJson(dto): ValidatedJson<CreateUserDto>) -> Response {
    match users::create_user(&state, dto).await {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(e @ UserError::EmailTaken) => (StatusCode::CONFLICT, Json(json!({ "error": e.to_string() }))).into_response(),
    }
}

/// `GET /v1/users/schema`: JSON Schema of the creation payload.
pub async fn schema() -> Json<Value> {
    Json(dto::create_user_schema())
}

/// `GET /v1/users/profile`: the caller's own profile. Inactive accounts are
/// authenticated but forbidden.
pub async fn profile(auth: AuthUser) -> Result<Json<UserProfile>, StatusCode> {
    if !auth.user.is_active {
        tracing::info!(user_id = %auth.user.id, "inactive user denied profile");
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(auth.user.profile()))
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
