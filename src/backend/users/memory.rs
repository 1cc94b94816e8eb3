/**
 * In-Memory User Repository
 *
 * `UserRepository` kept in process memory. Enforces the same email
 * uniqueness and not-found semantics as the PostgreSQL implementation so
 * services and handlers can be tested without a database.
 */

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::users::model::{NewUser, User, UserChanges};
use crate::backend::users::repository::{RepositoryError, UserRepository};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    // BTreeMap keeps insertion order since ids only grow
    rows: BTreeMap<i64, User>,
}

/// In-memory implementation of [`UserRepository`]
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn email_taken(rows: &BTreeMap<i64, User>, email: &str, except: Option<i64>) -> bool {
    rows.values()
        .any(|user| user.email == email && Some(user.id) != except)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut inner = self.inner.write().await;

        if email_taken(&inner.rows, &user.email, None) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "email {} already exists",
                user.email
            )));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let stored = User {
            id: inner.next_id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.inner
            .read()
            .await
            .rows
            .values()
            .find(|user| user.email == email)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn update_by_id(&self, id: i64, changes: UserChanges) -> Result<User, RepositoryError> {
        let mut inner = self.inner.write().await;

        if !inner.rows.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        if let Some(email) = &changes.email {
            if email_taken(&inner.rows, email, Some(id)) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "email {email} already exists"
                )));
            }
        }

        let user = inner.rows.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        changes.apply_to(user);
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
