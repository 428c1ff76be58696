//! Auth routes: password login, logout, and the bearer-token extractor.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use dto::{LoginRequest, LoginResponse};
use serde_json::json;

use crate::services::{session, users};
use crate::state::{AppState, StoredUser};

/// Pull the token out of an `Authorization: Bearer <token>` header value.
pub(crate) fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user resolved from the bearer session token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: StoredUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state, token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /v1/auth/login`: exchange credentials for a session token.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let Some(user_id) = users::authenticate(&state, &body.email, &body.password).await else {
        tracing::info!("login rejected");
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "invalid credentials" }))).into_response();
    };

    let token = session::create_session(&state, user_id).await;
    tracing::info!(%user_id, "session created");
    Json(LoginResponse { token }).into_response()
}

/// `POST /v1/auth/logout`: drop the caller's session.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    if session::delete_session(&state, &auth.token).await {
        tracing::info!(user_id = %auth.user.id, "session deleted");
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
