/**
 * User Repository Contract
 *
 * Persistence port consumed by `UserService` and `AuthService`. One
 * implementation per backing store: `PgUserRepository` for PostgreSQL and
 * `InMemoryUserRepository` for tests.
 */

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::users::model::{NewUser, User, UserChanges};

/// Repository failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the id or email
    #[error("user not found")]
    NotFound,

    /// A uniqueness constraint rejected the write
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other failure of the underlying store
    #[error("store error: {0}")]
    Store(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::ConstraintViolation(db_err.message().to_string())
            }
            other => Self::Store(other.to_string()),
        }
    }
}

/// CRUD operations over the credential store
///
/// Object-safe via `async_trait` so it can be shared as `Arc<dyn UserRepository>`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new row and return it with its assigned id.
    /// Fails with `ConstraintViolation` if the email already exists.
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;

    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError>;

    /// All users in insertion order
    async fn list_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Apply `changes` to the row and bump `updated_at`.
    async fn update_by_id(&self, id: i64, changes: UserChanges) -> Result<User, RepositoryError>;

    /// Hard delete. Deleting a missing id fails with `NotFound`.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
