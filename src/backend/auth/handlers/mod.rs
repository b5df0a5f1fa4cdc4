//! Authentication Handlers Module
//!
//! Axum handlers translating HTTP requests into `AuthService` calls.
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration
//! - **`login`** - POST /auth/login - User authentication
//! - **`get_me`** - GET /auth/me - Current user profile (bearer token)
//! - **`list_users`** - GET /users - All user profiles
//!
//! Errors are `AuthError` values rendered as `{"message": ...}`.

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// User listing handler
pub mod users;

use axum::{extract::rejection::JsonRejection, Json};

use crate::backend::error::AuthError;
use crate::shared::ValidationError;

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use register::register;
pub use users::list_users;

/// Unwrap a JSON body, turning a malformed body into a validation error
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AuthError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            Err(ValidationError::new("body", "Request body must be a valid JSON object.").into())
        }
    }
}
