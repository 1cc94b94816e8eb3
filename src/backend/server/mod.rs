//! Server Module
//!
//! Startup wiring: configuration of the store, shared state and the
//! assembled application.
//!
//! - **`config`** - PostgreSQL pool and migrations
//! - **`state`**  - `AppState` and its `FromRef` projections
//! - **`init`**   - `create_app`, `build_router`, `run`

/// Database configuration
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use init::{build_router, create_app, run, StartupError};
pub use state::AppState;
