//! In-process stub of the user API for client integration tests.
//!
//! Profile responses are keyed on the bearer token so a test picks the
//! outcome by choosing which token to hold.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{any, get, post};
use client::{ClientConfig, History, SessionContext, TokenCookie};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const GOOD_TOKEN: &str = "good-token";
pub const INACTIVE_TOKEN: &str = "inactive-token";
pub const BROKEN_TOKEN: &str = "broken-token";
pub const STALE_TOKEN: &str = "stale-token";

pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(5);

pub const LOGIN_EMAIL: &str = "a@b.com";
pub const LOGIN_PASSWORD: &str = "abcdef";

#[derive(Clone, Default)]
struct Stub {
    profile_hits: Arc<AtomicUsize>,
    logout_hits: Arc<AtomicUsize>,
}

pub struct StubServer {
    pub base_url: String,
    stub: Stub,
}

impl StubServer {
    pub fn profile_hits(&self) -> usize {
        self.stub.profile_hits.load(Ordering::SeqCst)
    }

    pub fn logout_hits(&self) -> usize {
        self.stub.logout_hits.load(Ordering::SeqCst)
    }

    pub fn session(&self, token: Option<&str>) -> (SessionContext, Arc<History>) {
        session_for(&self.base_url, token)
    }
}

pub fn session_for(base_url: &str, token: Option<&str>) -> (SessionContext, Arc<History>) {
    let config = ClientConfig::new(base_url).expect("config");
    session_with_config(&config, token)
}

/// Session whose requests give up after `timeout`.
pub fn session_with_timeout(base_url: &str, token: Option<&str>, timeout: Duration) -> (SessionContext, Arc<History>) {
    let mut config = ClientConfig::new(base_url).expect("config");
    config.timeout = timeout;
    session_with_config(&config, token)
}

fn session_with_config(config: &ClientConfig, token: Option<&str>) -> (SessionContext, Arc<History>) {
    let cookie = token.map_or_else(TokenCookie::new, |t| TokenCookie::with_token(t));
    let history = Arc::new(History::new());
    let session = SessionContext::new(config, cookie, history.clone()).expect("session");
    (session, history)
}

pub async fn spawn() -> StubServer {
    let stub = Stub::default();
    let app = Router::new()
        .route("/v1/users/profile", get(profile))
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/logout", post(logout))
        .route("/echo", any(echo))
        .route("/status/{code}", any(status))
        .route("/text", get(text))
        .route("/slow", get(slow))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    StubServer { base_url: format!("http://{addr}"), stub }
}

/// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn sample_profile() -> Value {
    json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "email": LOGIN_EMAIL,
        "name": "Alice",
        "isActive": true
    })
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

async fn profile(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    stub.profile_hits.fetch_add(1, Ordering::SeqCst);
    let expected = |token: &str| format!("Bearer {token}");
    match authorization(&headers) {
        Some(h) if h == expected(GOOD_TOKEN) => Json(sample_profile()).into_response(),
        Some(h) if h == expected(INACTIVE_TOKEN) => {
            (StatusCode::FORBIDDEN, Json(json!({"message": "account inactive"}))).into_response()
        }
        Some(h) if h == expected(BROKEN_TOKEN) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"}))).into_response()
        }
        _ => (StatusCode::UNAUTHORIZED, Json(json!({"message": "unauthorized"}))).into_response(),
    }
}

async fn login(body: String) -> Response {
    let creds: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    if creds["email"] == LOGIN_EMAIL && creds["password"] == LOGIN_PASSWORD {
        Json(json!({"token": GOOD_TOKEN})).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"message": "invalid credentials"}))).into_response()
    }
}

async fn logout(State(stub): State<Stub>) -> StatusCode {
    stub.logout_hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::NO_CONTENT
}

async fn echo(method: Method, headers: HeaderMap, RawQuery(query): RawQuery, body: String) -> Json<Value> {
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap_or(Value::String(body))
    };
    Json(json!({
        "method": method.as_str(),
        "authorization": authorization(&headers),
        "query": query,
        "body": body,
    }))
}

async fn status(Path(code): Path<u16>) -> Response {
    let status = StatusCode::from_u16(code).expect("status code");
    if status == StatusCode::NO_CONTENT {
        return status.into_response();
    }
    (status, Json(json!({"message": format!("status {code}")}))).into_response()
}

/// Answers long after any test timeout has fired.
async fn slow() -> Json<Value> {
    tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    Json(json!({ "late": true }))
}

async fn text() -> &'static str {
    "plain words"
}
