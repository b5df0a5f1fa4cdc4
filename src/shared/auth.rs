/**
 * Authentication Types
 *
 * Request and response types for the register, login and current-user
 * operations. They carry no behaviour and are shared by the service layer
 * and the HTTP handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Register request
///
/// Every field is optional so that missing input reaches the validator
/// instead of failing deserialization.
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(default)]
pub struct RegisterRequest {
    /// Display name (more than 5 characters)
    pub name: Option<String>,
    /// Email address, unique across users
    pub email: Option<String>,
    /// Plaintext password (at least 7 characters), hashed before storage
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Login request
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(default)]
pub struct LoginRequest {
    /// Email address used at registration
    pub email: Option<String>,
    /// Plaintext password, verified against the stored hash
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Session result
///
/// Returned by register and login. Serialized as
/// `{"authenticated": true, "userId": "...", "token": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub authenticated: bool,
    pub user_id: Uuid,
    /// Signed session token (24-hour expiration by default)
    pub token: String,
}

/// User profile (without sensitive data)
///
/// The public view of a stored user. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// User listing response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UsersResponse {
    pub users: Vec<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_session_result_json_keys() {
        let id = Uuid::new_v4();
        let session = SessionResult {
            authenticated: true,
            user_id: id,
            token: "abc".to_string(),
        };
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "authenticated": true, "userId": id.to_string(), "token": "abc" })
        );
    }

    #[test]
    fn test_register_request_missing_fields() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(request.name.is_none());
        assert_eq!(request.email.as_deref(), Some("a@x.com"));
        assert!(request.password.is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let register = RegisterRequest::new("alice1", "a@x.com", "secret1");
        let login = LoginRequest::new("a@x.com", "secret1");
        assert!(!format!("{:?}", register).contains("secret1"));
        assert!(!format!("{:?}", login).contains("secret1"));
    }
}
