//! Backend Error Module
//!
//! Error type returned by HTTP handlers and middleware.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError, status mapping, From conversions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation
//!
//! Store errors surface as 500 unless mapped (not-found ⇒ 404, uniqueness
//! ⇒ 400). Authentication failures use fixed messages. Nothing is retried.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
