//! User Service - Main Library
//!
//! A small user-management backend: CRUD endpoints over a single `User`
//! entity, email/password login issuing a JWT bearer token, and middleware
//! that validates the token and gates privileged routes by role.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that are not tied to the HTTP server
//!   - Validation error type
//!   - Environment-driven application configuration
//!
//! - **`backend`** - Server-side code
//!   - Axum router, middleware, handlers
//!   - Authentication service and token codec
//!   - User repository (PostgreSQL and in-memory) and user service
//!
//! # Usage
//!
//! ```rust,no_run
//! use user_service::backend::server::init::create_app;
//! use user_service::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Layer-specific `thiserror` enums (`RepositoryError`, `TokenError`,
//!   `AuthError`, `ConfigError`)
//! - `backend::error::BackendError` at the HTTP boundary

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
pub mod backend;
