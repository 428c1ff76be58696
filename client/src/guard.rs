//! Route guard run before every navigation.
//!
//! | token   | destination | user cached?          | decision                  |
//! |---------|-------------|-----------------------|---------------------------|
//! | absent  | `/auth`     | -                     | allow                     |
//! | absent  | other       | -                     | redirect `/auth`          |
//! | present | `/auth`     | yes / fetch succeeds  | redirect `/`              |
//! | present | `/auth`     | fetch fails           | clear token, allow        |
//! | present | other       | yes / fetch succeeds  | allow                     |
//! | present | other       | fetch fails           | clear token, redirect `/auth` |
//!
//! Every check is evaluated against the current cookie and store; nothing is
//! remembered between navigations. The profile fetch is awaited before the
//! decision is returned.

use std::sync::Arc;

use crate::cookie::TokenCookie;
use crate::navigation::{AUTH_PATH, RouteTarget, route_path};
use crate::store::MeStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(RouteTarget),
}

pub struct AuthGuard {
    cookie: TokenCookie,
    store: Arc<MeStore>,
}

impl AuthGuard {
    #[must_use]
    pub fn new(cookie: TokenCookie, store: Arc<MeStore>) -> Self {
        Self { cookie, store }
    }

    /// Decide what happens to a navigation towards `to`.
    pub async fn check(&self, to: &str) -> NavigationDecision {
        let to_auth = route_path(to) == AUTH_PATH;

        if !self.cookie.is_present() {
            return if to_auth { NavigationDecision::Allow } else { NavigationDecision::Redirect(RouteTarget::auth()) };
        }

        let has_user = self.ensure_user().await;
        let decision = match (to_auth, has_user) {
            (true, true) => NavigationDecision::Redirect(RouteTarget::home()),
            (true, false) => {
                self.drop_token(to);
                NavigationDecision::Allow
            }
            (false, true) => NavigationDecision::Allow,
            (false, false) => {
                self.drop_token(to);
                NavigationDecision::Redirect(RouteTarget::auth())
            }
        };
        tracing::debug!(to, ?decision, "route guard");
        decision
    }

    async fn ensure_user(&self) -> bool {
        if self.store.has_user() {
            return true;
        }
        self.store.get_profile().await;
        self.store.has_user()
    }

    fn drop_token(&self, to: &str) {
        tracing::info!(to, "profile unavailable; clearing session token");
        self.cookie.clear();
    }
}
