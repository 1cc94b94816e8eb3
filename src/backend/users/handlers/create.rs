/**
 * Create User Handler
 *
 * POST /users. The caller must be authenticated; the new account is always
 * created with the `user` role.
 *
 * # Errors
 *
 * * `400 Bad Request` - malformed body, invalid email, empty password or
 *   duplicate email
 * * `500 Internal Server Error` - hashing or store failure
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::users::handlers::types::{CreateUserRequest, UserDto};
use crate::backend::users::service::UserService;

pub async fn create_user(
    State(users): State<UserService>,
    AuthUser(caller): AuthUser,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>), BackendError> {
    let Json(request) = body?;
    tracing::info!(created_by = caller.user_id, "Create user request for: {}", request.email);

    let user = users.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}
