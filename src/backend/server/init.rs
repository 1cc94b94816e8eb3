/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations
 * 2. Wrap the pool in `PgUserRepository`
 * 3. Build `AppState` (user and auth services over the repository)
 * 4. Create the router
 *
 * `build_router` skips the first two steps and accepts any repository,
 * which is how the HTTP tests run against `InMemoryUserRepository`.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, run_migrations};
use crate::backend::server::state::AppState;
use crate::backend::users::postgres::PgUserRepository;
use crate::backend::users::repository::UserRepository;
use crate::shared::{AppConfig, ConfigError};

/// Fatal startup failures
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Assemble the router over an already constructed repository
pub fn build_router(repo: Arc<dyn UserRepository>, config: &AppConfig) -> Router<()> {
    let app_state = AppState::new(repo, config);
    create_router(app_state, &config.cors_allowed_origins)
}

/// Create and configure the Axum application backed by PostgreSQL
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing user service");

    let pool = connect_database(&config.database).await?;
    run_migrations(&pool).await?;

    let repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
    let app = build_router(repo, config);

    tracing::info!(api_version = %config.api_version, "Router configured");
    Ok(app)
}

/// Bind `config.server_address` and serve until Ctrl-C
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let app = create_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.server_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.server_address.clone(),
            source,
        })?;
    tracing::info!("Listening on {}", config.server_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, draining connections"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
