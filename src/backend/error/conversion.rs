/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers and middleware can return
 * it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "invalid credentials",
 *   "status": 401
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", message);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", message);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
