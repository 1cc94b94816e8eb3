/**
 * Admin Seeding Tool
 *
 * Creates an administrator account if none exists for the given email.
 * Running it twice is harmless: an existing email is logged and left alone.
 *
 * ```text
 * seed-admin --email admin@example.com --password secret --name Admin
 * ```
 */

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use user_service::backend::server::config::{connect_database, run_migrations};
use user_service::backend::users::{
    CreateUser, PgUserRepository, RepositoryError, Role, UserRepository, UserService,
};
use user_service::shared::{load_env_file, AppConfig};

#[derive(Debug, Parser)]
#[command(name = "seed-admin", about = "Create the initial admin user")]
struct Cli {
    /// Admin email address
    #[arg(long)]
    email: String,

    /// Admin password
    #[arg(long)]
    password: String,

    /// Display name
    #[arg(long, default_value = "Admin")]
    name: String,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    load_env_file(cli.env_file.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect_database(&config.database).await?;
    run_migrations(&pool).await?;

    let repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));

    match repo.get_by_email(cli.email.trim()).await {
        Ok(existing) => {
            tracing::info!(
                user_id = existing.id,
                role = %existing.role,
                "User {} already exists, nothing to do",
                existing.email
            );
            return Ok(());
        }
        Err(RepositoryError::NotFound) => {}
        Err(e) => return Err(e.into()),
    }

    let users = UserService::new(repo, config.bcrypt_cost);
    let admin = users
        .create(CreateUser {
            name: cli.name,
            email: cli.email,
            password: cli.password,
            role: Role::Admin,
        })
        .await?;

    tracing::info!(user_id = admin.id, "Admin user {} created", admin.email);
    Ok(())
}
