/**
 * Input Validation
 *
 * Pure checks run before any store access.
 *
 * # Registration Rules
 *
 * Checked in this order, first failure wins:
 *
 * 1. Password present and at least 7 characters
 * 2. Name present and longer than 5 characters
 * 3. Email present and well formed
 *
 * Lengths count characters, not bytes.
 */

use crate::shared::{LoginRequest, RegisterRequest, ValidationError};

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 7;

/// Names must be strictly longer than this
pub const MIN_NAME_EXCLUSIVE: usize = 5;

/// Longest password bcrypt hashes without truncation (72 bytes with its NUL)
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Validated registration input
#[derive(Debug, Clone, Copy)]
pub struct RegistrationInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Validate registration input
pub fn validate_registration(request: &RegisterRequest) -> Result<RegistrationInput<'_>, ValidationError> {
    let password = request
        .password
        .as_deref()
        .filter(|p| p.chars().count() >= MIN_PASSWORD_LENGTH)
        .ok_or_else(|| {
            ValidationError::new(
                "password",
                format!("Password error. Password needs to be at least {} characters.", MIN_PASSWORD_LENGTH),
            )
        })?;
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new(
            "password",
            format!("Password error. Password must be at most {} bytes.", MAX_PASSWORD_BYTES),
        ));
    }

    let name = request
        .name
        .as_deref()
        .filter(|n| n.chars().count() > MIN_NAME_EXCLUSIVE)
        .ok_or_else(|| {
            ValidationError::new(
                "name",
                format!("Username error. Username needs to be longer than {} characters.", MIN_NAME_EXCLUSIVE),
            )
        })?;

    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| is_valid_email(e))
        .ok_or_else(|| ValidationError::new("email", "Email error. Email must be a valid address."))?;

    Ok(RegistrationInput { name, email, password })
}

/// Validated login input
#[derive(Debug, Clone, Copy)]
pub struct LoginInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Check that login input carries both fields
pub fn require_login_fields(request: &LoginRequest) -> Result<LoginInput<'_>, ValidationError> {
    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ValidationError::new("email", "Email is required."))?;

    let password = request
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ValidationError::new("password", "Password is required."))?;

    Ok(LoginInput { email, password })
}

/// Validate email format
///
/// Exactly one `@`, a non-empty local part, and a dotted domain whose
/// labels are non-empty and do not start or end with `-`.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.')
        && domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}

/// Canonical form used for storage and lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest::new(name, email, password)
    }

    #[test]
    fn test_valid_registration() {
        let req = request("alice1", "a@x.com", "secret1");
        let input = validate_registration(&req).unwrap();
        assert_eq!(input.name, "alice1");
        assert_eq!(input.email, "a@x.com");
        assert_eq!(input.password, "secret1");
    }

    #[test]
    fn test_password_boundary() {
        let err = validate_registration(&request("alice1", "a@x.com", "secret")).unwrap_err();
        assert_eq!(err.field, "password");
        assert!(validate_registration(&request("alice1", "a@x.com", "secret1")).is_ok());
    }

    #[test]
    fn test_password_byte_limit() {
        let at_limit = "a".repeat(MAX_PASSWORD_BYTES);
        assert!(validate_registration(&request("alice1", "a@x.com", &at_limit)).is_ok());

        let over = format!("{}one", at_limit);
        let err = validate_registration(&request("alice1", "a@x.com", &over)).unwrap_err();
        assert_eq!(err.field, "password");

        // 40 characters but 80 bytes
        let wide = "é".repeat(40);
        assert_eq!(validate_registration(&request("alice1", "a@x.com", &wide)).unwrap_err().field, "password");
    }

    #[test]
    fn test_name_boundary() {
        let err = validate_registration(&request("alice", "a@x.com", "secret1")).unwrap_err();
        assert_eq!(err.field, "name");
        assert!(validate_registration(&request("alice1", "a@x.com", "secret1")).is_ok());
    }

    #[test]
    fn test_lengths_count_characters() {
        // six characters, twelve bytes
        assert!(validate_registration(&request("ééééé1", "a@x.com", "secret1")).is_ok());
        // six bytes, three characters
        let err = validate_registration(&request("alice1", "a@x.com", "ééé")).unwrap_err();
        assert_eq!(err.field, "password");
    }

    #[test]
    fn test_missing_fields() {
        let mut req = request("alice1", "a@x.com", "secret1");
        req.email = None;
        assert_eq!(validate_registration(&req).unwrap_err().field, "email");

        req.name = None;
        assert_eq!(validate_registration(&req).unwrap_err().field, "name");

        req.password = None;
        assert_eq!(validate_registration(&req).unwrap_err().field, "password");
    }

    #[test]
    fn test_password_checked_first() {
        let err = validate_registration(&request("a", "nope", "x")).unwrap_err();
        assert_eq!(err.field, "password");
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@x.com."));
        assert!(!is_valid_email("a@b@x.com"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@x..com"));
        assert!(!is_valid_email("a@x.-com"));
        assert!(!is_valid_email("a@-x.com"));
        assert!(is_valid_email("a@my-host.com"));
    }

    #[test]
    fn test_email_is_trimmed() {
        let req = request("alice1", "  a@x.com ", "secret1");
        assert_eq!(validate_registration(&req).unwrap().email, "a@x.com");
    }

    #[test]
    fn test_require_login_fields() {
        let ok = LoginRequest::new("a@x.com", "secret1");
        assert!(require_login_fields(&ok).is_ok());

        let missing = LoginRequest {
            email: Some("a@x.com".to_string()),
            password: None,
        };
        assert_matches!(
            require_login_fields(&missing),
            Err(ValidationError { ref field, .. }) if field == "password"
        );

        let blank = LoginRequest::new("   ", "secret1");
        assert_eq!(require_login_fields(&blank).unwrap_err().field, "email");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }
}
