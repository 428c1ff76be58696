//! HTTP client wrapper with bearer auth and auth-failure interception.
//!
//! ERROR HANDLING
//! ==============
//! | outcome            | result                                      |
//! |--------------------|---------------------------------------------|
//! | no response        | `Err(FetchError::Network)`, unchanged       |
//! | 401                | token cleared, `Ok(None)`                   |
//! | 403                | `403` route pushed, `Ok(None)`              |
//! | other error status | `Err(FetchError::Response)` with payload    |
//!
//! 401 and 403 are swallowed: the caller sees an empty success. The client
//! never redirects to `/auth`; the route guard notices the cleared token on
//! the next navigation.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::cookie::TokenCookie;
use crate::error::FetchError;
use crate::navigation::{Navigator, RouteTarget};

/// Shared HTTP client. Clones share the connection pool, the token cookie,
/// and the navigator.
#[derive(Clone)]
pub struct FetchClient {
    http: Client,
    base_url: String,
    cookie: TokenCookie,
    navigator: Arc<dyn Navigator>,
}

impl FetchClient {
    /// Build a client for `config`, reading the token from `cookie` on every
    /// request and sending forbidden redirects to `navigator`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the TLS backend fails to start.
    pub fn new(config: &ClientConfig, cookie: TokenCookie, navigator: Arc<dyn Navigator>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_base_url.clone(), cookie, navigator })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn cookie(&self) -> &TokenCookie {
        &self.cookie
    }

    /// `GET url`, with `params` encoded into the query string.
    ///
    /// # Errors
    ///
    /// See the module table.
    pub async fn get(&self, url: &str, params: Option<&Map<String, Value>>) -> Result<Option<Value>, FetchError> {
        self.request(Method::GET, url, params, None).await
    }

    /// `POST url` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See the module table.
    pub async fn post(&self, url: &str, body: Option<&Value>) -> Result<Option<Value>, FetchError> {
        self.request(Method::POST, url, None, body).await
    }

    /// `PUT url` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See the module table.
    pub async fn put(&self, url: &str, body: Option<&Value>) -> Result<Option<Value>, FetchError> {
        self.request(Method::PUT, url, None, body).await
    }

    /// `DELETE url` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See the module table.
    pub async fn delete(&self, url: &str, body: Option<&Value>) -> Result<Option<Value>, FetchError> {
        self.request(Method::DELETE, url, None, body).await
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        params: Option<&Map<String, Value>>,
        body: Option<&Value>,
    ) -> Result<Option<Value>, FetchError> {
        let target = join_url(&self.base_url, url);
        let mut builder = self.http.request(method.clone(), &target);
        if let Some(params) = params {
            builder = builder.query(&query_pairs(params));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder = self.authorize(builder);

        tracing::debug!(%method, url = %target, "request");
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            return Ok(parse_body(&text));
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                tracing::warn!(%method, url = %target, "unauthorized; clearing session token");
                self.cookie.clear();
                Ok(None)
            }
            StatusCode::FORBIDDEN => {
                tracing::warn!(%method, url = %target, "forbidden; redirecting");
                self.navigator.push(RouteTarget::forbidden()).await;
                Ok(None)
            }
            _ => {
                let text = response.text().await?;
                let data = parse_body(&text).unwrap_or(Value::Null);
                tracing::debug!(%method, url = %target, status = status.as_u16(), "request failed");
                Err(FetchError::Response { status: status.as_u16(), data })
            }
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.cookie.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Resolve `url` against `base`. Absolute URLs pass through untouched.
fn join_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_owned();
    }
    if url.is_empty() {
        return base.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
}

/// Flatten a params map into query pairs. Nulls are dropped and arrays
/// repeat the key once per element.
fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parse a response body: empty or `null` is `None`, JSON is parsed, and
/// anything else is returned as a JSON string.
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(text.to_owned())),
    }
}
