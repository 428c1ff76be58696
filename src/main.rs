mod config;
mod extract;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new();

    // Demo account (non-fatal: the server runs empty without it).
    if let Some(seed) = config.seed_user {
        match services::users::create_user(&state, seed).await {
            Ok(profile) => tracing::info!(email = %profile.email, "seed user created"),
            Err(e) => tracing::warn!(error = %e, "seed user not created"),
        }
    }

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "usergate listening");
    axum::serve(listener, app).await.expect("server failed");
}
