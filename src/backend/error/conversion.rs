/**
 * Error Conversion
 *
 * `AuthError` implements `IntoResponse`, so handlers return it directly.
 *
 * # Response Format
 *
 * ```json
 * { "message": "User with that email exists." }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}
