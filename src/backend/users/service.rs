/**
 * User Service
 *
 * Request-level operations over the `UserRepository`: input validation,
 * password hashing before persistence, and coalescing of empty update
 * values so that `""` never overwrites a stored name or email.
 */

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::backend::auth::password::{hash_password, PasswordError};
use crate::backend::users::model::{NewUser, Role, User, UserChanges};
use crate::backend::users::repository::{RepositoryError, UserRepository};
use crate::shared::SharedError;

/// Plaintext input for a new account
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Plaintext input for an update; empty strings count as absent
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error(transparent)]
    Validation(#[from] SharedError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { repo, bcrypt_cost }
    }

    #[instrument(name = "users.service.create", skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateUser) -> Result<User, UserServiceError> {
        let email = input.email.trim().to_string();
        validate_email(&email)?;
        if input.password.is_empty() {
            return Err(SharedError::validation("password", "must not be empty").into());
        }

        let password_hash = hash_password(&input.password, self.bcrypt_cost).await?;
        let user = self
            .repo
            .create(NewUser {
                name: input.name.trim().to_string(),
                email,
                password_hash,
                role: input.role,
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "Created user");
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, UserServiceError> {
        Ok(self.repo.list_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<User, UserServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    #[instrument(name = "users.service.update", skip(self, input), fields(user_id = id))]
    pub async fn update(&self, id: i64, input: UpdateUser) -> Result<User, UserServiceError> {
        let name = non_empty(input.name);
        let email = non_empty(input.email);
        if let Some(email) = &email {
            validate_email(email)?;
        }

        // Only a new, non-empty password is re-hashed
        let password_hash = match input.password.filter(|p| !p.is_empty()) {
            Some(password) => Some(hash_password(&password, self.bcrypt_cost).await?),
            None => None,
        };

        let changes = UserChanges {
            name,
            email,
            password_hash,
        };
        debug!(password_changed = changes.password_hash.is_some(), "Applying user changes");

        let user = self.repo.update_by_id(id, changes).await?;
        info!("Updated user");
        Ok(user)
    }

    #[instrument(name = "users.service.delete", skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), UserServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(user_id = id, "Deleted user");
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Basic shape check; the store enforces uniqueness
fn validate_email(email: &str) -> Result<(), SharedError> {
    if email.is_empty() {
        return Err(SharedError::validation("email", "must not be empty"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(SharedError::validation("email", "must be a valid email address")),
    }
}
