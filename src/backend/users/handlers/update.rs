/**
 * Update User Handler
 *
 * PUT /users/{id}. Any authenticated caller may update any user. Fields
 * that are absent or empty keep their stored value; a new password is
 * re-hashed before it reaches the store.
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::users::handlers::types::{UpdateUserRequest, UserDto};
use crate::backend::users::service::UserService;

pub async fn update_user(
    State(users): State<UserService>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserDto>, BackendError> {
    let Path(id) = id?;
    let Json(request) = body?;

    let user = users.update(id, request.into()).await?;
    Ok(Json(user.into()))
}
