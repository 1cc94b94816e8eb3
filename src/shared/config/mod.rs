//! Application configuration module
//!
//! Configuration is read from environment variables, each with a default
//! suitable for local development. A `.env` file can be loaded first with
//! [`load_env_file`]; only the given path (or `./.env` when no path is given)
//! is read, parent directories are never searched.
//!
//! | Variable               | Default                    |
//! |------------------------|----------------------------|
//! | `DATABASE_URL`         | built from the `DB_*` keys |
//! | `DB_HOST`              | `localhost`                |
//! | `DB_PORT`              | `5432`                     |
//! | `DB_USER`              | `postgres`                 |
//! | `DB_PASSWORD`          | `postgres`                 |
//! | `DB_NAME`              | `users`                    |
//! | `DB_MAX_CONNECTIONS`   | `10`                       |
//! | `SERVER_ADDRESS`       | `0.0.0.0:8080`             |
//! | `JWT_SECRET`           | development secret         |
//! | `API_VERSION`          | `v0`                       |
//! | `BCRYPT_COST`          | `bcrypt::DEFAULT_COST`     |
//! | `CORS_ALLOWED_ORIGINS` | none (localhost only)      |

use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Secret used when `JWT_SECRET` is unset. Only acceptable for local runs.
pub const DEVELOPMENT_JWT_SECRET: &str = "development-secret-change-me";

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_API_VERSION: &str = "v0";

/// Work factors bcrypt accepts.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Connection settings for the PostgreSQL credential store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// Full connection URL; takes precedence over the discrete fields
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// Connection URL, either the explicit one or assembled from the parts
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "users".to_string(),
            max_connections: 10,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    /// Socket address the HTTP server binds to
    pub server_address: String,
    /// HMAC secret for signing bearer tokens
    pub jwt_secret: String,
    /// Value reported by `GET /version`
    pub api_version: String,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Extra CORS origins allowed besides `http://localhost:*`
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let database = DatabaseSettings {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or(defaults.database.host),
            port: parse_or("DB_PORT", get("DB_PORT"), defaults.database.port)?,
            user: get("DB_USER").unwrap_or(defaults.database.user),
            password: get("DB_PASSWORD").unwrap_or(defaults.database.password),
            name: get("DB_NAME").unwrap_or(defaults.database.name),
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS"),
                defaults.database.max_connections,
            )?,
        };

        let server_address = get("SERVER_ADDRESS")
            .map(|value| normalize_address(&value))
            .unwrap_or(defaults.server_address);

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                defaults.jwt_secret
            }
        };

        let bcrypt_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), defaults.bcrypt_cost)?;
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database,
            server_address,
            jwt_secret,
            api_version: get("API_VERSION").unwrap_or(defaults.api_version),
            bcrypt_cost,
            cors_allowed_origins,
        })
    }
}

/// Load variables from a `.env` file into the process environment
///
/// With an explicit path the file must exist. Without one, `./.env` is read
/// if present and silently skipped otherwise. Variables already set in the
/// environment are not overridden.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(path) => dotenv::from_path(path).map_err(|source| ConfigError::EnvFile {
            path: path.display().to_string(),
            message: source.to_string(),
        }),
        None => match dotenv::from_path(".env") {
            Ok(()) => Ok(()),
            Err(err) if err.not_found() => Ok(()),
            Err(err) => Err(ConfigError::EnvFile {
                path: ".env".to_string(),
                message: err.to_string(),
            }),
        },
    }
}

/// A bare port such as `8080` binds on all interfaces.
fn normalize_address(value: &str) -> String {
    let value = value.trim();
    if let Some(port) = value.strip_prefix(':') {
        format!("0.0.0.0:{port}")
    } else if value.parse::<u16>().is_ok() {
        format!("0.0.0.0:{value}")
    } else {
        value.to_string()
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to load env file {path}: {message}")]
    EnvFile { path: String, message: String },
}
