//! Shared Module
//!
//! Types that do not depend on the HTTP server: the validation error used
//! when request input is rejected, and the application configuration loaded
//! from the environment.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, ConfigError, DatabaseSettings, load_env_file};
