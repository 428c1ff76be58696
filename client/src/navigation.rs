//! Navigation targets and the navigator seam used for redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fetch client pushes the `403` route on forbidden responses and the
//! session context pushes wherever the guard lands. Both go through
//! [`Navigator`], so a UI shell can plug in its router while the CLI and the
//! tests use the in-memory [`History`].

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;

use std::fmt;

use parking_lot::Mutex;

pub const AUTH_ROUTE_NAME: &str = "auth";
pub const AUTH_PATH: &str = "/auth";
pub const HOME_PATH: &str = "/";
pub const FORBIDDEN_ROUTE_NAME: &str = "403";

/// Where a navigation goes: a literal path or a named route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Path(String),
    Named(String),
}

impl RouteTarget {
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The login page.
    #[must_use]
    pub fn auth() -> Self {
        Self::path(AUTH_PATH)
    }

    #[must_use]
    pub fn home() -> Self {
        Self::path(HOME_PATH)
    }

    #[must_use]
    pub fn forbidden() -> Self {
        Self::named(FORBIDDEN_ROUTE_NAME)
    }

    /// Path this target renders at. Named routes live at `/{name}`.
    #[must_use]
    pub fn resolved_path(&self) -> String {
        match self {
            Self::Path(path) => route_path(path).to_owned(),
            Self::Named(name) => format!("/{name}"),
        }
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.write_str(path),
            Self::Named(name) => write!(f, "@{name}"),
        }
    }
}

/// Path component of a navigation string, without query or fragment.
#[must_use]
pub fn route_path(to: &str) -> &str {
    let end = to.find(['?', '#']).unwrap_or(to.len());
    &to[..end]
}

/// Receives redirects. Implementations must not call back into the guard.
#[async_trait::async_trait]
pub trait Navigator: Send + Sync {
    async fn push(&self, target: RouteTarget);
}

/// In-memory navigator that records every push.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<RouteTarget>>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<RouteTarget> {
        self.entries.lock().clone()
    }

    /// Most recent push.
    #[must_use]
    pub fn current(&self) -> Option<RouteTarget> {
        self.entries.lock().last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait::async_trait]
impl Navigator for History {
    async fn push(&self, target: RouteTarget) {
        tracing::debug!(%target, "navigate");
        self.entries.lock().push(target);
    }
}
