/**
 * Server Configuration
 *
 * Database connection for the server and the seeding tool.
 *
 * # Startup Sequence
 *
 * 1. Build the connection URL (`DATABASE_URL` wins over the `DB_*` values)
 * 2. Open a bounded PostgreSQL pool
 * 3. Run the embedded migrations from `migrations/`
 *
 * Any failure here aborts startup.
 */

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::shared::DatabaseSettings;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the PostgreSQL pool without touching the schema
pub async fn connect_database(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        host = %settings.host,
        database = %settings.name,
        max_connections = settings.max_connections,
        "Connecting to database..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&settings.connection_url())
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Apply the embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
