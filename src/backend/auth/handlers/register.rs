/**
 * Register Handler
 *
 * POST /auth/register
 *
 * # Example Request
 *
 * ```http
 * POST /auth/register HTTP/1.1
 * Content-Type: application/json
 *
 * { "name": "alice1", "email": "a@x.com", "password": "secret1" }
 * ```
 *
 * # Example Response
 *
 * ```json
 * { "authenticated": true, "userId": "6f1c...", "token": "eyJhbGciOiJIUzI1NiIs..." }
 * ```
 */

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::backend::auth::handlers::json_body;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::shared::{RegisterRequest, SessionResult};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid name, email, password or body
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - hashing, store or token failure
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<SessionResult>, AuthError> {
    let request = json_body(payload)?;
    let session = auth.register(request).await?;
    Ok(Json(session))
}
