/**
 * Login Handler
 *
 * POST /auth/login
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Sign a token carrying the email, valid for 24 hours
 *
 * # Security
 *
 * - Unknown email and wrong password both answer `401 invalid credentials`
 * - Passwords are never logged or returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed JSON body
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "password": "securepassword123"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = body?;
    tracing::info!("Login request for: {}", request.email);

    let token = auth
        .authenticate(&request.email, &request.password)
        .await
        .inspect_err(|e| tracing::warn!("Login failed for {}: {}", request.email, e))?;

    tracing::info!("User logged in successfully: {}", request.email);
    Ok(Json(TokenResponse { token }))
}
