//! Shared Error Types
//!
//! This module defines the error types that do not depend on the server
//! runtime: input validation failures. They are produced by pure code and
//! converted into `AuthError` at the service boundary.
//!
//! # Usage
//!
//! ```rust
//! use authcore::shared::error::ValidationError;
//!
//! let error = ValidationError::new("email", "Email must be a valid address.");
//! assert_eq!(error.field, "email");
//! ```
use thiserror::Error;

/// Rejected input field
///
/// Only the first failing field is reported; validation stops there.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ValidationError::new("email", "Invalid email format");
        assert_eq!(error.field, "email");
        assert_eq!(error.message, "Invalid email format");
    }

    #[test]
    fn test_error_display_is_message_only() {
        let error = ValidationError::new("password", "Password is too short.");
        assert_eq!(error.to_string(), "Password is too short.");
    }

    #[test]
    fn test_error_clone() {
        let error = ValidationError::new("name", "message");
        assert_eq!(error.clone(), error);
    }
}
