//! GET /users - every user profile, oldest first, without password hashes.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::shared::UsersResponse;

/// User listing handler
pub async fn list_users(State(auth): State<Arc<AuthService>>) -> Result<Json<UsersResponse>, AuthError> {
    let users = auth.list_users().await?;
    Ok(Json(UsersResponse { users }))
}
