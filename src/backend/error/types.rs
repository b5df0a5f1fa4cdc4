/**
 * Backend Error Types
 *
 * This module defines the error type returned by the authentication core
 * and surfaced by the HTTP handlers.
 *
 * # Status Code Mapping
 *
 * - `Validation`, `InvalidCredentials` - 400 Bad Request
 * - `Unauthorized` - 401 Unauthorized (bearer token missing or invalid)
 * - `NotFound` - 404 Not Found
 * - `Conflict` - 409 Conflict
 * - everything else - 500 Internal Server Error
 *
 * All variants are terminal; nothing is retried.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::users::StoreError;
use crate::shared::{ConfigError, ValidationError};

/// Message returned for every internal failure
const INTERNAL_MESSAGE: &str = "Internal server error.";

/// Authentication error
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration or login input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A user with the same email already exists
    #[error("{message}")]
    Conflict { message: String },

    /// The requested user does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Password did not match the stored hash
    #[error("The credentials do not match.")]
    InvalidCredentials,

    /// Bearer token missing, malformed or expired
    #[error("{message}")]
    Unauthorized { message: String },

    /// Password hashing or verification failed
    #[error("Hashing error: {message}")]
    Hashing { message: String },

    /// Required configuration is absent or invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Token signing failed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Credential store failure
    #[error("Store error: {message}")]
    Store { message: String },
}

impl AuthError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Hashing { .. } | Self::Config(_) | Self::Token(_) | Self::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error is an unclassified internal failure
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the message safe to return to a client
    ///
    /// Internal failures collapse to a generic message; their detail is
    /// only logged.
    pub fn message(&self) -> String {
        if self.is_internal() {
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => AuthError::conflict("User with that email exists."),
            other => AuthError::Store {
                message: other.to_string(),
            },
        }
    }
}
