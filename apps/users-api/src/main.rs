use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::UserRepository;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let state = AppState::new(config);
    info!(
        seeded = state.config.seed_sample_data,
        users = state.users.list().await.len(),
        "User store ready"
    );

    // health is merged before the middleware layers are applied
    let app = api::app(&state)?;

    let server_config = state.config.server.clone();
    info!(
        "Starting {} v{} ({:?} shutdown timeout)",
        state.config.app.name, state.config.app.version, server_config.shutdown_timeout
    );

    create_production_app(app, &server_config, async move {
        let remaining = state.users.list().await.len();
        info!(users = remaining, "Shutting down: discarding in-memory user store");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User Management API shutdown complete");
    Ok(())
}
