/**
 * Session Tokens
 *
 * HS256 JWTs binding a user id and an expiry. `TokenIssuer` signs tokens
 * for the auth flows; `TokenVerifier` is used only by the bearer-token
 * extractor in front of protected routes.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::backend::error::AuthError;
use crate::shared::{AppConfig, ConfigError};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub id: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Parse the user id claim
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.id).map_err(|e| {
            tracing::warn!("Invalid user ID in token: {:?}", e);
            AuthError::unauthorized("Invalid token.")
        })
    }
}

/// Session token issuer
#[derive(Clone)]
pub struct TokenIssuer {
    key: Option<EncodingKey>,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer; an absent or empty secret makes `issue` fail
    pub fn new(secret: Option<&str>, ttl: Duration) -> Self {
        let key = secret
            .filter(|s| !s.is_empty())
            .map(|s| EncodingKey::from_secret(s.as_bytes()));
        Self { key, ttl }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.jwt_secret.as_deref(), config.token_ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fail early when no signing key is configured
    pub fn ensure_ready(&self) -> Result<(), ConfigError> {
        self.key
            .as_ref()
            .map(|_| ())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))
    }

    /// Sign a token for a user
    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        let key = self
            .key
            .as_ref()
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let now = chrono::Utc::now().timestamp();
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: self.ttl.as_secs().to_string(),
            })?;
        let claims = Claims {
            id: user_id.to_string(),
            iat: now,
            exp,
        };

        Ok(encode(&Header::default(), &claims, key)?)
    }
}

/// Session token verifier
#[derive(Clone)]
pub struct TokenVerifier {
    key: Option<DecodingKey>,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: Option<&str>) -> Self {
        let key = secret
            .filter(|s| !s.is_empty())
            .map(|s| DecodingKey::from_secret(s.as_bytes()));
        Self {
            key,
            validation: Validation::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.jwt_secret.as_deref())
    }

    /// Verify and decode a token
    ///
    /// Bad signatures and expired tokens are `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let key = self
            .key
            .as_ref()
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Invalid token: {:?}", e);
                AuthError::unauthorized("Invalid token.")
            })
    }
}
