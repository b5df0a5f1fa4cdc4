//! Application configuration module
//!
//! Configuration is read once at startup, either from the process
//! environment (`AppConfig::from_env`) or assembled with the builder in
//! tests. The resulting value is immutable and handed to the components
//! that need it.
//!
//! # Environment Variables
//!
//! | Variable         | Default                          |
//! |------------------|----------------------------------|
//! | `JWT_SECRET`     | none, token issuing fails        |
//! | `TOKEN_TTL_SECS` | 86400 (24 hours), at most 10 years |
//! | `BCRYPT_COST`    | 8                                |
//! | `DATABASE_URL`   | none, in-memory user store       |
//! | `SERVER_PORT`    | 3000                             |

use std::time::Duration;
use thiserror::Error;

/// Default token lifetime: 24 hours
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Longest accepted token lifetime: 10 years
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 10);

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 8;

/// Accepted bcrypt work factor range
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HMAC secret used to sign session tokens
    pub jwt_secret: Option<String>,
    /// Lifetime of issued session tokens
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// SQLite connection URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// HTTP listen port
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl: DEFAULT_TOKEN_TTL,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            database_url: None,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = AppConfig::builder();

        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        } else {
            tracing::warn!("JWT_SECRET not set. Session tokens cannot be issued.");
        }
        if let Some(raw) = get("TOKEN_TTL_SECS") {
            let secs = parse_value::<u64>("TOKEN_TTL_SECS", &raw)?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(raw) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &raw)?);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(raw) = get("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &raw)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl.is_zero() || self.token_ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: self.token_ttl.as_secs().to_string(),
            });
        }
        Ok(())
    }

    /// Fail unless a signing secret is present
    pub fn require_secret(&self) -> Result<&str, ConfigError> {
        self.jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            jwt_secret: self.jwt_secret,
            token_ttl: self.token_ttl.unwrap_or(defaults.token_ttl),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
            database_url: self.database_url,
            port: self.port.unwrap_or(defaults.port),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
