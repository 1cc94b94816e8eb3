//! Store integration tests (require PostgreSQL)

mod user_repository_test;
