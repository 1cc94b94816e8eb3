//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /auth/login - exchange email and password for a token
//!
//! The token is then sent back on every protected request in the
//! `Authorization` header, either as `Bearer <token>` or bare.

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

pub use types::{LoginRequest, TokenResponse};

pub use login::login;
