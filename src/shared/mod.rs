//! Shared Module
//!
//! Types that do not depend on the HTTP server or the database: request and
//! response shapes, validation errors and application configuration. The
//! backend builds on these; tests and clients can use them directly.

/// Request and response types for the auth operations
pub mod auth;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use auth::{LoginRequest, RegisterRequest, SessionResult, UserProfile, UsersResponse};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ValidationError;
