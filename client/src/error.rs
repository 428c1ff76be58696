//! Client error types.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use serde_json::Value;

/// Failure of a request made through [`crate::FetchClient`].
///
/// HTTP 401 and 403 never surface here; the client swallows them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// No response arrived: connect failure, timeout, or a broken body stream.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with an error status. `data` is the parsed error
    /// payload (`null` when the body was empty).
    #[error("request failed with status {status}")]
    Response { status: u16, data: Value },

    /// A success body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status for [`FetchError::Response`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error payload for [`FetchError::Response`].
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Response { data, .. } => Some(data),
            _ => None,
        }
    }

    /// True when no response was received.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Failure of [`crate::SessionContext::navigate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("too many redirects navigating to {to} ({hops} hops)")]
    RedirectLoop { to: String, hops: usize },
}
