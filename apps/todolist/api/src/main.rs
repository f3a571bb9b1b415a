use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
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

    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    }

    let state = AppState { config, db };

    // - /health: liveness with app name/version
    // - /ready: database ping
    let probes = health_router(state.config.app).merge(api::ready_router(state.clone()));

    // create_router adds /api, docs and middleware to the composed routes
    let app = create_router::<openapi::ApiDoc>(api::routes(&state), probes, &state.config.server)?;

    info!(
        app = state.config.app.name,
        version = state.config.app.version,
        "Starting todo-list API with graceful shutdown (30s timeout)"
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        close_postgres(state.db, "todolist").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo-list API shutdown complete");
    Ok(())
}
