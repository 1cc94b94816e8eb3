/**
 * Authentication Handler Types
 *
 * Request and response bodies for `POST /auth/login`.
 */

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
