/**
 * Get Current User Handler
 *
 * GET /auth/me
 *
 * Requires `Authorization: Bearer <token>`. The `AuthUser` extractor
 * verifies the token; this handler only looks the user up.
 */

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::backend::middleware::AuthUser;
use crate::shared::UserProfile;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid bearer token
/// * `404 Not Found` - the token's user no longer exists
pub async fn get_me(
    State(auth): State<Arc<AuthService>>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserProfile>, AuthError> {
    let profile = auth.who_am_i(caller.user_id).await?;
    Ok(Json(profile))
}
