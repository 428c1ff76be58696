//! The `auth_token` cookie holding the session token.
//!
//! Handles are cheap clones sharing one slot, so the fetch client, the guard,
//! and the session context all observe the same token. An empty string is
//! indistinguishable from an absent token.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;

use std::sync::Arc;

use parking_lot::RwLock;

pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

#[derive(Clone, Debug, Default)]
pub struct TokenCookie {
    value: Arc<RwLock<Option<String>>>,
}

impl TokenCookie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cookie already holding `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let cookie = Self::new();
        cookie.set(token);
        cookie
    }

    /// Cookie name as sent to the browser.
    #[must_use]
    pub fn name(&self) -> &'static str {
        AUTH_TOKEN_COOKIE
    }

    /// Current token, or `None` when absent or empty.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.value.read().as_ref().filter(|token| !token.is_empty()).cloned()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.read().as_ref().is_some_and(|token| !token.is_empty())
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.value.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.value.write() = None;
    }
}
