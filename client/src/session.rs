//! Session context wiring the cookie, client, store, and guard together.
//!
//! LIFECYCLE
//! =========
//! Build one [`SessionContext`] at startup and hand out references. It is
//! torn down by dropping it; [`SessionContext::logout`] resets it to the
//! signed-out state without rebuilding.

use std::sync::Arc;

use serde_json::json;

use crate::config::ClientConfig;
use crate::cookie::TokenCookie;
use crate::error::{FetchError, NavigationError};
use crate::fetch::FetchClient;
use crate::guard::{AuthGuard, NavigationDecision};
use crate::navigation::{Navigator, RouteTarget};
use crate::store::MeStore;

pub const LOGIN_ENDPOINT: &str = "/v1/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/v1/auth/logout";
pub const MAX_REDIRECTS: usize = 5;

pub struct SessionContext {
    cookie: TokenCookie,
    navigator: Arc<dyn Navigator>,
    client: FetchClient,
    store: Arc<MeStore>,
    guard: AuthGuard,
}

impl SessionContext {
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, cookie: TokenCookie, navigator: Arc<dyn Navigator>) -> Result<Self, FetchError> {
        let client = FetchClient::new(config, cookie.clone(), Arc::clone(&navigator))?;
        let store = Arc::new(MeStore::new(client.clone()));
        let guard = AuthGuard::new(cookie.clone(), Arc::clone(&store));
        Ok(Self { cookie, navigator, client, store, guard })
    }

    #[must_use]
    pub fn cookie(&self) -> &TokenCookie {
        &self.cookie
    }

    #[must_use]
    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    #[must_use]
    pub fn store(&self) -> &MeStore {
        &self.store
    }

    #[must_use]
    pub fn guard(&self) -> &AuthGuard {
        &self.guard
    }

    /// Navigate to `to`, following guard redirects until a destination is
    /// allowed. The landing route is pushed to the navigator once the chain
    /// settles. A profile fetch answered with 403 during the chain pushes the
    /// `403` route on its own, so the history can then read `[@403, /auth]`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::RedirectLoop`] after [`MAX_REDIRECTS`]
    /// consecutive redirects.
    pub async fn navigate(&self, to: &str) -> Result<RouteTarget, NavigationError> {
        let guard = &self.guard;
        let target = follow_redirects(to, |location| async move { guard.check(&location).await }).await?;
        self.navigator.push(target.clone()).await;
        Ok(target)
    }

    /// Exchange credentials for a session token and store it in the cookie.
    /// Returns `false` when the backend rejected the credentials (the 401 is
    /// swallowed by the client).
    ///
    /// # Errors
    ///
    /// Propagates network failures, non-auth error statuses, and a malformed
    /// login response.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool, FetchError> {
        let body = json!({ "email": email, "password": password });
        let Some(value) = self.client.post(LOGIN_ENDPOINT, Some(&body)).await? else {
            return Ok(false);
        };
        let response: dto::LoginResponse = serde_json::from_value(value)?;
        self.cookie.set(response.token);
        self.store.clear();
        tracing::info!("logged in");
        Ok(true)
    }

    /// Drop the session: tell the backend if a token is held, then clear the
    /// token and the cached user regardless of the outcome.
    pub async fn logout(&self) {
        if self.cookie.is_present() {
            if let Err(e) = self.client.post(LOGOUT_ENDPOINT, None).await {
                tracing::debug!(error = %e, "logout request failed");
            }
        }
        self.cookie.clear();
        self.store.clear();
        tracing::info!("logged out");
    }
}

/// Resolve `to` through `decide` until a destination is allowed.
async fn follow_redirects<F, Fut>(to: &str, mut decide: F) -> Result<RouteTarget, NavigationError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = NavigationDecision>,
{
    let mut target = RouteTarget::path(to);
    let mut hops = 0;

    loop {
        let location = match &target {
            RouteTarget::Path(path) => path.clone(),
            RouteTarget::Named(_) => target.resolved_path(),
        };
        match decide(location).await {
            NavigationDecision::Allow => return Ok(target),
            NavigationDecision::Redirect(next) => {
                hops += 1;
                if hops > MAX_REDIRECTS {
                    tracing::warn!(to, hops, "redirect loop");
                    return Err(NavigationError::RedirectLoop { to: to.to_owned(), hops: MAX_REDIRECTS });
                }
                tracing::debug!(from = %target, to = %next, "redirect");
                target = next;
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
