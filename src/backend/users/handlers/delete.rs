use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::users::service::UserService;

/// DELETE /users/{id}, admin only
pub async fn delete_user(
    State(users): State<UserService>,
    AuthUser(caller): AuthUser,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, BackendError> {
    let Path(id) = id?;
    users.delete(id).await?;
    tracing::info!(deleted_by = caller.user_id, user_id = id, "User removed");
    Ok(StatusCode::NO_CONTENT)
}
