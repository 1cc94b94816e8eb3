use axum::{extract::State, Json};

use crate::backend::error::BackendError;
use crate::backend::users::handlers::types::UserDto;
use crate::backend::users::service::UserService;

/// GET /users
pub async fn list_users(
    State(users): State<UserService>,
) -> Result<Json<Vec<UserDto>>, BackendError> {
    let all = users.list().await?;
    tracing::debug!("Listing {} users", all.len());
    Ok(Json(all.into_iter().map(UserDto::from).collect()))
}
