//! Shared Error Types
//!
//! Errors describing input that failed validation before reaching the
//! repository. The backend wraps them in `BackendError::Validation`, which
//! renders as `400 Bad Request`.
//!
//! # Usage
//!
//! ```rust
//! use user_service::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must contain '@'");
//! ```
use thiserror::Error;

/// Validation and payload errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Request body could not be parsed
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new malformed body error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed_body(err.to_string())
    }
}
