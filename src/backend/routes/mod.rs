//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Router assembly, CORS and tracing layers
//! └── api_routes.rs  - Route table and access gates
//! ```
//!
//! # Route Table
//!
//! | Method | Path           | Access        |
//! |--------|----------------|---------------|
//! | POST   | `/auth/login`  | public        |
//! | GET    | `/version`     | public        |
//! | GET    | `/users`       | authenticated |
//! | POST   | `/users`       | authenticated |
//! | GET    | `/users/{id}`  | authenticated |
//! | PUT    | `/users/{id}`  | authenticated |
//! | DELETE | `/users/{id}`  | admin         |

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
