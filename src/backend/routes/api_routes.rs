/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/login` - exchange credentials for a token
 * - `GET /version`     - API version string
 *
 * ## Authenticated (`require_auth`)
 * - `GET /users`         - list users
 * - `POST /users`        - create a user
 * - `GET /users/{id}`    - fetch one user
 * - `PUT /users/{id}`    - update a user
 *
 * ## Admin (`require_auth` then `admin_only`)
 * - `DELETE /users/{id}` - delete a user
 */

use axum::{
    extract::State,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::backend::auth::login;
use crate::backend::middleware::{admin_only, require_auth};
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{create_user, delete_user, get_user, list_users, update_user};

/// GET /version
pub async fn version(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "version": state.api_version.as_ref() }))
}

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/version", get(version))
}

/// User routes behind the authentication gate
///
/// `admin_only` is layered on the DELETE method router only, so it always
/// runs inside `require_auth`.
pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .merge(delete(delete_user).route_layer(middleware::from_fn(admin_only))),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

/// Configure API routes on `router`
pub fn configure_api_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.merge(public_routes()).merge(user_routes(state))
}
