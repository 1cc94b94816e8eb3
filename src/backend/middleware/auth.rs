/**
 * Access Control Middleware
 *
 * Two gates applied per route:
 *
 * 1. `require_auth` - reads the `Authorization` header, validates the token
 *    through `AuthService` and attaches the resolved user to the request
 *    extensions. Missing header or failed validation ⇒ 401.
 * 2. `admin_only` - reads the attached user and rejects non-admins with 403.
 *    It must run after `require_auth`; with no identity present it answers
 *    500, since that means the gates were wired in the wrong order.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::service::AuthError;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::users::model::{Role, User};

/// Identity attached by `require_auth`
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Pull the token out of the `Authorization` header
///
/// Accepts `Bearer <token>` as well as a bare token.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| BackendError::unauthorized("authorization header required"))?
        .to_str()
        .map_err(|_| BackendError::unauthorized("authorization header is not valid text"))?
        .trim_start();

    // The scheme is split off before trimming so "Bearer " yields an empty token
    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        None if value.trim_end().eq_ignore_ascii_case("bearer") => "",
        _ => value.trim(),
    };

    if token.is_empty() {
        return Err(BackendError::unauthorized("authorization header required"));
    }
    Ok(token)
}

/// Authentication middleware
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let user = state.auth.validate_token(token).await.map_err(|e| {
        if !matches!(e, AuthError::Store(_)) {
            tracing::warn!("Rejected request token: {}", e);
        }
        BackendError::from(e)
    })?;

    request.extensions_mut().insert(AuthenticatedUser::from(&user));
    Ok(next.run(request).await)
}

/// Role gate for privileged routes
pub async fn admin_only(request: Request, next: Next) -> Result<Response, BackendError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| {
            tracing::error!("admin_only reached without an authenticated user");
            BackendError::internal("user not found in request context")
        })?;

    if !user.role.is_admin() {
        tracing::warn!(user_id = user.user_id, "Non-admin denied");
        return Err(BackendError::Forbidden);
    }

    Ok(next.run(request).await)
}

/// Extractor for the user attached by `require_auth`
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("authorization header required")
            })
    }
}
