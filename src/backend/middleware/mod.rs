//! Middleware Module
//!
//! Request gates applied to routes before they reach handlers.
//!
//! - **`auth`** - `require_auth` (401 without a valid token) and
//!   `admin_only` (403 for non-admins)
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{middleware, routing::delete, Router};
//! use user_service::backend::middleware::{admin_only, require_auth};
//!
//! let routes = Router::new()
//!     .route("/users/{id}", delete(delete_user).route_layer(middleware::from_fn(admin_only)))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

pub mod auth;

pub use auth::{admin_only, bearer_token, require_auth, AuthUser, AuthenticatedUser};
