//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Users
//! and sessions live in memory for the lifetime of the process; nothing is
//! persisted.

use std::collections::HashMap;
use std::sync::Arc;

use dto::UserProfile;
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// STORED USER
// =============================================================================

/// Account record. Only the salted hash of the password is kept.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: Uuid,
    /// Normalized (trimmed, lowercase) address; unique across users.
    pub email: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub password_salt: String,
    pub password_hash: String,
}

impl StoredUser {
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile { id: self.id, email: self.email.clone(), name: self.name.clone(), is_active: self.is_active }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub users: Arc<RwLock<HashMap<Uuid, StoredUser>>>,
    /// Session token -> user id.
    pub sessions: Arc<RwLock<HashMap<String, Uuid>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
