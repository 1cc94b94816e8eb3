/**
 * Backend Error Types
 *
 * `BackendError` is the single error type handlers and middleware return.
 * Each variant maps to one HTTP status; lower-layer errors convert into it
 * with `From`.
 *
 * # Status Mapping
 *
 * | Variant               | Status |
 * |-----------------------|--------|
 * | `NotFound`            | 404    |
 * | `ConstraintViolation` | 400    |
 * | `Validation`          | 400    |
 * | `InvalidCredentials`  | 401    |
 * | `InvalidToken`        | 401    |
 * | `Unauthorized`        | 401    |
 * | `Forbidden`           | 403    |
 * | `Store`               | 500    |
 * | `Internal`            | 500    |
 *
 * Credential and token failures carry fixed messages so responses never
 * reveal whether an email exists or why a token was rejected.
 */

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::service::AuthError;
use crate::backend::users::repository::RepositoryError;
use crate::backend::users::service::UserServiceError;
use crate::shared::SharedError;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing entity
    #[error("{message}")]
    NotFound { message: String },

    /// Uniqueness violation in the store
    #[error("{message}")]
    ConstraintViolation { message: String },

    /// Failure of the underlying store
    #[error("{message}")]
    Store { message: String },

    /// Login failed; deliberately does not say why
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token failed validation; deliberately does not say why
    #[error("invalid token")]
    InvalidToken,

    /// Missing or unusable authentication
    #[error("{message}")]
    Unauthorized { message: String },

    /// Authenticated but lacking the required role
    #[error("access denied, admin role required")]
    Forbidden,

    /// Malformed or invalid request input
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Anything that indicates a bug or an unexpected failure
    #[error("{message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ConstraintViolation { .. } | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::InvalidToken | Self::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Store { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<RepositoryError> for BackendError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::not_found("user not found"),
            RepositoryError::ConstraintViolation(_) => Self::ConstraintViolation {
                message: "email already exists".to_string(),
            },
            RepositoryError::Store(message) => Self::Store { message },
        }
    }
}

impl From<UserServiceError> for BackendError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::Validation(e) => Self::Validation(e),
            UserServiceError::Repository(e) => e.into(),
            UserServiceError::Password(e) => Self::internal(e.to_string()),
        }
    }
}

impl From<AuthError> for BackendError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::InvalidToken(_) | AuthError::UserNotFound => Self::InvalidToken,
            AuthError::Store(e) => e.into(),
            AuthError::Issuing(e) => Self::internal(e.to_string()),
            AuthError::Password(e) => Self::internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(SharedError::malformed_body(rejection.body_text()))
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(SharedError::validation("id", rejection.body_text()))
    }
}
