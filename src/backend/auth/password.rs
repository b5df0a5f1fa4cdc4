/**
 * Password Hashing
 *
 * Salted bcrypt hashes. The work factor comes from configuration and is
 * fixed at construction. bcrypt compares in constant time.
 *
 * bcrypt reads at most 72 bytes of input, terminating NUL included. The
 * non-truncating variants are used so a longer password is refused instead
 * of silently cut.
 */

use bcrypt::BcryptError;

use crate::backend::error::AuthError;
use crate::shared::AppConfig;

/// bcrypt password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    ///
    /// Output differs between calls for the same input (random salt).
    pub fn hash(&self, plain: &str) -> Result<String, AuthError> {
        bcrypt::non_truncating_hash(plain, self.cost).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            AuthError::hashing(e.to_string())
        })
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// A mismatch is `Ok(false)`, as is a password too long to ever have
    /// been hashed. Only a malformed hash is an error.
    pub fn verify(&self, plain: &str, hash: &str) -> Result<bool, AuthError> {
        match bcrypt::non_truncating_verify(plain, hash) {
            Ok(valid) => Ok(valid),
            Err(BcryptError::Truncation(len)) => {
                tracing::warn!("Password of {} bytes cannot match a bcrypt hash", len);
                Ok(false)
            }
            Err(e) => {
                tracing::error!("Password verification error: {:?}", e);
                Err(AuthError::hashing(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hasher().hash("secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(hasher().verify("secret1", &hash).unwrap());
        assert!(!hasher().verify("secret2", &hash).unwrap());
        assert!(!hasher().verify("", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hasher().hash("secret1").unwrap();
        let second = hasher().hash("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_long_passwords_are_not_truncated() {
        let prefix = "a".repeat(71);
        let one = format!("{}one", prefix);
        let two = format!("{}two", prefix);

        assert_matches!(hasher().hash(&one), Err(AuthError::Hashing { .. }));

        let hash = hasher().hash(&prefix).unwrap();
        assert!(hasher().verify(&prefix, &hash).unwrap());
        assert!(!hasher().verify(&one, &hash).unwrap());
        assert!(!hasher().verify(&two, &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert_matches!(hasher().verify("secret1", "not-a-hash"), Err(AuthError::Hashing { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::builder().bcrypt_cost(5).build().unwrap();
        assert_eq!(PasswordHasher::from_config(&config).cost(), 5);
    }
}
