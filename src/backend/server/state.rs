/**
 * Application State
 *
 * `AppState` is the read-only container shared by every request: the user
 * service, the authentication service (both over the same injected
 * repository) and the API version string.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(auth): State<AuthService>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::users::repository::UserRepository;
use crate::backend::users::service::UserService;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub auth: AuthService,
    pub api_version: Arc<str>,
}

impl AppState {
    /// Wire the services over `repo` using the values from `config`
    pub fn new(repo: Arc<dyn UserRepository>, config: &AppConfig) -> Self {
        let codec = TokenCodec::new(&config.jwt_secret);
        Self {
            users: UserService::new(Arc::clone(&repo), config.bcrypt_cost),
            auth: AuthService::new(repo, codec).with_hash_cost(config.bcrypt_cost),
            api_version: Arc::from(config.api_version.as_str()),
        }
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
