/**
 * Authentication Service
 *
 * Login and token validation on top of the user repository and the token
 * codec. Holds no state of its own beyond those dependencies.
 *
 * # Failure collapsing
 *
 * - An unknown email and a wrong password both produce `InvalidCredentials`,
 *   so a caller cannot tell which accounts exist. An unknown email still
 *   pays for one bcrypt verification against a placeholder hash, so the
 *   two cases also take comparable time.
 * - Malformed, forged and expired tokens all produce `InvalidToken`; the
 *   codec's specific reason is kept as the error source for logging.
 */

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

use crate::backend::auth::password::{hash_password, verify_password, PasswordError};
use crate::backend::auth::sessions::{TokenCodec, TokenError};
use crate::backend::users::model::User;
use crate::backend::users::repository::{RepositoryError, UserRepository};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken(#[source] TokenError),

    /// Token was valid but its account no longer exists
    #[error("user not found")]
    UserNotFound,

    #[error("failed to issue token: {0}")]
    Issuing(#[source] TokenError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(RepositoryError),
}

/// Hashed once per service and verified against on the unknown-email path
const PLACEHOLDER_PASSWORD: &str = "user-service-placeholder-password";

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    codec: TokenCodec,
    hash_cost: u32,
    placeholder_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, codec: TokenCodec) -> Self {
        Self {
            users,
            codec,
            hash_cost: bcrypt::DEFAULT_COST,
            placeholder_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Cost of the placeholder hash; should match the cost stored hashes use
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Verify `email`/`password` and issue a bearer token
    #[instrument(name = "auth.authenticate", skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let user = match self.users.get_by_email(email).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound) => {
                debug!("Login for unknown email");
                self.verify_placeholder(password).await;
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(AuthError::Store(e)),
        };

        let valid = match verify_password(password, &user.password_hash).await {
            Ok(valid) => valid,
            Err(PasswordError::Bcrypt(e)) => {
                warn!(user_id = user.id, "Stored password hash is unreadable: {}", e);
                false
            }
            Err(e) => return Err(e.into()),
        };
        if !valid {
            debug!(user_id = user.id, "Login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.codec.sign(&user.email).map_err(AuthError::Issuing)?;
        debug!(user_id = user.id, "Issued token");
        Ok(token)
    }

    /// Burn one bcrypt verification; the outcome is ignored
    async fn verify_placeholder(&self, password: &str) {
        let hash = self
            .placeholder_hash
            .get_or_try_init(|| hash_password(PLACEHOLDER_PASSWORD, self.hash_cost))
            .await;
        match hash {
            Ok(hash) => {
                let _ = verify_password(password, hash).await;
            }
            Err(e) => warn!("Failed to prepare placeholder hash: {}", e),
        }
    }

    /// Verify a bearer token and resolve the current user record
    pub async fn validate_token(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.codec.verify(token).map_err(|e| {
            debug!("Rejected token: {}", e);
            AuthError::InvalidToken(e)
        })?;

        match self.users.get_by_email(&claims.email).await {
            Ok(user) => Ok(user),
            Err(RepositoryError::NotFound) => {
                debug!("Token for a user that no longer exists");
                Err(AuthError::UserNotFound)
            }
            Err(e) => Err(AuthError::Store(e)),
        }
    }
}
