//! Users Module
//!
//! The user domain: the record type, the repository port with its Postgres
//! and in-memory implementations, the service that owns validation and
//! password hashing, and the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs         - Module exports and documentation
//! ├── model.rs       - User, Role, NewUser, UserChanges
//! ├── repository.rs  - UserRepository trait and RepositoryError
//! ├── postgres.rs    - PgUserRepository (sqlx)
//! ├── memory.rs      - InMemoryUserRepository
//! ├── service.rs     - UserService
//! └── handlers/      - HTTP handlers for /users
//! ```

pub mod model;
pub mod repository;
pub mod postgres;
pub mod memory;
pub mod service;
pub mod handlers;

pub use memory::InMemoryUserRepository;
pub use model::{NewUser, Role, User, UserChanges};
pub use postgres::PgUserRepository;
pub use repository::{RepositoryError, UserRepository};
pub use service::{CreateUser, UpdateUser, UserService, UserServiceError};
