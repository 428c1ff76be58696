//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

use reqwest::Url;

pub const API_BASE_URL_ENV: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";
/// Applied to every request, connect through body.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base URL is not an absolute `http`/`https` URL.
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL without a trailing slash.
    pub api_base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config for `api_base_url` with the standard request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not parse or
    /// uses a scheme other than `http`/`https`.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::InvalidBaseUrl { url: api_base_url.to_owned(), reason };

        let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
        }

        Ok(Self { api_base_url: trimmed.to_owned(), timeout: Duration::from_millis(REQUEST_TIMEOUT_MS) })
    }

    /// Build config from `API_BASE_URL`, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is set to an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        Self::new(&raw)
    }
}
