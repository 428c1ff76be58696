//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use dto::{CreateUserDto, ValidationErrors};
use serde_json::json;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("invalid seed user: {0}")]
    InvalidSeedUser(#[from] ValidationErrors),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub seed_user: Option<CreateUserDto>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SEED_USER_EMAIL` + `SEED_USER_PASSWORD`: demo account created at startup
    /// - `SEED_USER_NAME`: display name for the demo account
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let seed_user = parse_seed_user(
            std::env::var("SEED_USER_EMAIL").ok(),
            std::env::var("SEED_USER_PASSWORD").ok(),
            std::env::var("SEED_USER_NAME").ok(),
        )?;
        Ok(Self { port, seed_user })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

/// Seed account is enabled only when an email is given; it goes through the
/// same validation as `POST /v1/users`.
fn parse_seed_user(
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
) -> Result<Option<CreateUserDto>, ConfigError> {
    let Some(email) = email.filter(|e| !e.trim().is_empty()) else {
        return Ok(None);
    };
    let payload = json!({ "email": email, "password": password, "name": name });
    Ok(Some(CreateUserDto::from_payload(&payload)?))
}
