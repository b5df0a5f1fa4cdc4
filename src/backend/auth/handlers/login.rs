/**
 * Login Handler
 *
 * POST /auth/login
 *
 * Password verification goes through bcrypt's constant-time comparison.
 * A wrong password yields the same message whatever the account.
 */
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::backend::auth::handlers::json_body;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::shared::{LoginRequest, SessionResult};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or password mismatch
/// * `404 Not Found` - no user with this email
/// * `500 Internal Server Error` - store, hashing or token failure
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<SessionResult>, AuthError> {
    let request = json_body(payload)?;
    let session = auth.login(request).await?;
    Ok(Json(session))
}
