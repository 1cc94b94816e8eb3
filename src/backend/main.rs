/**
 * User Service Server Entry Point
 *
 * Loads configuration, connects to PostgreSQL, runs migrations and serves
 * the HTTP API until Ctrl-C.
 */

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use user_service::backend::server::run;
use user_service::shared::{load_env_file, AppConfig};

#[derive(Debug, Parser)]
#[command(name = "user-service-server", about = "User management HTTP API")]
struct Cli {
    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    load_env_file(cli.env_file.as_deref())?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting server on {}", config.server_address);

    run(config).await?;
    Ok(())
}
