//! Backend Module
//!
//! Server-side code: the authentication core and its axum adapter.
//!
//! # Architecture
//!
//! - **`auth`** - validation, hashing, tokens, credential stores, AuthService, handlers
//! - **`error`** - `AuthError` and its HTTP response conversion
//! - **`middleware`** - bearer-token extractor
//! - **`routes`** - route configuration and router assembly
//! - **`server`** - application state, store selection, app construction
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── auth/           - Authentication core and handlers
//! ├── error/          - Error types
//! ├── middleware/     - Request extractors
//! ├── routes/         - Route configuration
//! └── server/         - Server initialization and state
//! ```
//!
//! # Thread Safety
//!
//! Requests share nothing mutable except the credential store, which is
//! the single synchronization point. Everything else in `AppState` is
//! immutable behind `Arc`.

/// Authentication and user management
pub mod auth;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Re-export commonly used types
pub use auth::AuthService;
pub use error::AuthError;
pub use server::{create_app, AppState};
