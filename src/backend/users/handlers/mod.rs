//! User Handlers Module
//!
//! HTTP handlers for the `/users` resource. All of them sit behind
//! `require_auth`; `delete_user` additionally sits behind `admin_only`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs     - Module exports and documentation
//! ├── types.rs   - Request bodies and the public user DTO
//! ├── list.rs    - GET    /users
//! ├── create.rs  - POST   /users
//! ├── get.rs     - GET    /users/{id}
//! ├── update.rs  - PUT    /users/{id}
//! └── delete.rs  - DELETE /users/{id}
//! ```
//!
//! Responses never carry the password hash; every user leaves through
//! `UserDto`.

/// Request and response types
pub mod types;

pub mod list;
pub mod create;
pub mod get;
pub mod update;
pub mod delete;

pub use types::{CreateUserRequest, UpdateUserRequest, UserDto};

pub use create::create_user;
pub use delete::delete_user;
pub use get::get_user;
pub use list::list_users;
pub use update::update_user;
