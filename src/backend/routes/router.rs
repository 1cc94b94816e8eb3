/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers:
 *
 * 1. `TraceLayer` - one span per request, logged through `tracing`
 * 2. `CorsLayer`  - browser access from `http://localhost:<port>` and
 *    configured origins
 *
 * Unknown paths fall through to a JSON 404.
 */

use std::time::Duration;

use axum::{
    http::{header, request::Parts, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origins: &[String]) -> Router<()> {
    let router = configure_api_routes(Router::new(), app_state.clone())
        .fallback(|| async { BackendError::not_found("route not found") })
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http());

    router.with_state(app_state)
}

/// CORS policy: `http://localhost:<port>`, plus the explicitly configured origins
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let configured: Vec<String> = allowed_origins.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| is_allowed_origin(o, &configured))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

fn is_allowed_origin(origin: &str, configured: &[String]) -> bool {
    is_localhost(origin) || configured.iter().any(|allowed| allowed == origin)
}

fn is_localhost(origin: &str) -> bool {
    origin
        .strip_prefix("http://localhost:")
        .is_some_and(|port| {
            port.bytes().all(|b| b.is_ascii_digit()) && port.parse::<u16>().is_ok()
        })
}
