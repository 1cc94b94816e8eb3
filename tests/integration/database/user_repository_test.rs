//! PostgreSQL repository tests
//!
//! Ignored by default; they need `DATABASE_URL` pointing at a disposable
//! database. Run with `cargo test -- --ignored --test-threads=1`.

use assert_matches::assert_matches;
use uuid::Uuid;

use user_service::backend::users::{
    NewUser, PgUserRepository, RepositoryError, Role, UserChanges, UserRepository,
};

use crate::common::TestDatabase;

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Test".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$notarealhashbutlongenough".to_string(),
        role: Role::User,
    }
}

fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_and_fetch() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.pool().clone());
    let email = unique_email();

    let created = repo.create(new_user(&email)).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.role, Role::User);

    let by_id = repo.get_by_id(created.id).await.unwrap();
    let by_email = repo.get_by_email(&email).await.unwrap();
    assert_eq!(by_id.id, created.id);
    assert_eq!(by_email.id, created.id);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_email_is_constraint_violation() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.pool().clone());
    let email = unique_email();

    repo.create(new_user(&email)).await.unwrap();
    let result = repo.create(new_user(&email)).await;
    assert_matches!(result, Err(RepositoryError::ConstraintViolation(_)));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_update_keeps_absent_fields() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.pool().clone());
    let created = repo.create(new_user(&unique_email())).await.unwrap();

    let updated = repo
        .update_by_id(
            created.id,
            UserChanges {
                name: Some("Renamed".to_string()),
                ..UserChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password_hash, created.password_hash);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_missing_rows_are_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.pool().clone());

    assert_matches!(repo.get_by_id(i64::MAX).await, Err(RepositoryError::NotFound));
    assert_matches!(repo.get_by_email("nobody@example.com").await, Err(RepositoryError::NotFound));
    assert_matches!(
        repo.update_by_id(i64::MAX, UserChanges::default()).await,
        Err(RepositoryError::NotFound)
    );
    assert_matches!(repo.delete_by_id(i64::MAX).await, Err(RepositoryError::NotFound));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_list_and_delete() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.pool().clone());

    let first = repo.create(new_user(&unique_email())).await.unwrap();
    let second = repo.create(new_user(&unique_email())).await.unwrap();

    let ids: Vec<i64> = repo.list_all().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    repo.delete_by_id(first.id).await.unwrap();
    let ids: Vec<i64> = repo.list_all().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![second.id]);
}
