//! Authentication Module
//!
//! Credential checks and stateless session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── password.rs  - bcrypt hashing off the async runtime
//! ├── sessions.rs  - HS256 token signing and verification
//! ├── service.rs   - AuthService: login and token validation
//! └── handlers/    - POST /auth/login
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens carry the user's email and expire after 24 hours
//! - A token is only honoured while its user still exists

pub mod password;

pub mod sessions;

pub mod service;

pub mod handlers;

pub use handlers::{login, LoginRequest, TokenResponse};
pub use service::{AuthError, AuthService};
pub use sessions::{Claims, TokenCodec, TokenError, TOKEN_TTL_HOURS};
