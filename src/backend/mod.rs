//! Backend Module
//!
//! The HTTP user service: an Axum server over a PostgreSQL user store, with
//! bcrypt passwords and HS256 session tokens.
//!
//! # Architecture
//!
//! Requests flow handler → service → repository:
//!
//! - **`routes`**     - route table, CORS and tracing layers
//! - **`middleware`** - `require_auth` and `admin_only` gates
//! - **`auth`**       - login, password hashing, token signing
//! - **`users`**      - user model, repository port and adapters, service, handlers
//! - **`server`**     - state, database setup, startup
//! - **`error`**      - `BackendError` and its JSON response
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request gates
//! ├── auth/           - Authentication
//! ├── users/          - User domain
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the two services and the API version. Both services
//! share one `Arc<dyn UserRepository>`; the repository is the only shared
//! mutable resource and is safe for concurrent use.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// User management
pub mod users;

pub use error::BackendError;
pub use server::{build_router, create_app, AppState};
