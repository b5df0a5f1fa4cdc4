//! authcore - Authentication Service Library
//!
//! A small authentication service: register, login and fetch the current
//! user, backed by a credential store.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependencies
//!   - Request/response types, validation errors, configuration
//!
//! - **`backend`** - Server-side code
//!   - Validation, bcrypt hashing, JWT issuing, credential stores
//!   - `AuthService` orchestrating the flows
//!   - Axum handlers, bearer-token extractor, router and startup
//!
//! # Usage
//!
//! ```rust,no_run
//! use authcore::backend::create_app;
//! use authcore::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::ValidationError` and `shared::ConfigError` for pure failures
//! - `backend::AuthError` for everything the service returns, mapped to
//!   HTTP status codes by the handlers

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
