//! # client
//!
//! Session-aware HTTP client for the user API.
//!
//! A navigation flows through the pieces leaves-last:
//!
//! ```text
//! SessionContext::navigate
//!   -> AuthGuard::check          (token present? user cached?)
//!     -> MeStore::get_profile    (GET /v1/users/profile, failures swallowed)
//!       -> FetchClient::get      (base URL, bearer header, 401/403 interception)
//! ```
//!
//! The token lives in a [`TokenCookie`], redirects are issued through a
//! [`Navigator`], and everything is wired together once in a
//! [`SessionContext`].

pub mod config;
pub mod cookie;
pub mod error;
pub mod fetch;
pub mod guard;
pub mod navigation;
pub mod session;
pub mod store;

pub use config::{ClientConfig, ConfigError};
pub use cookie::TokenCookie;
pub use error::{FetchError, NavigationError};
pub use fetch::FetchClient;
pub use guard::{AuthGuard, NavigationDecision};
pub use navigation::{History, Navigator, RouteTarget};
pub use session::SessionContext;
pub use store::MeStore;
