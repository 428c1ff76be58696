//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! All API routes live under `/v1`. Authentication is a bearer session token
//! issued by `POST /v1/auth/login`; see [`auth::AuthUser`].

pub mod auth;
pub mod users;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/v1/users", post(users::create_user))
        .route("/v1/users/schema", get(users::schema))
        .route("/v1/users/profile", get(users::profile))
        .route("/v1/auth/login", post(auth::login))
        .route("/v1/auth/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
