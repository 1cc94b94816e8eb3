use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::users::handlers::types::UserDto;
use crate::backend::users::service::UserService;

/// GET /users/{id}
pub async fn get_user(
    State(users): State<UserService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserDto>, BackendError> {
    let Path(id) = id?;
    let user = users.get(id).await?;
    Ok(Json(user.into()))
}
