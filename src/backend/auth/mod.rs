//! Authentication Module
//!
//! This module handles user registration, login and the current-user
//! lookup. The core (validation, hashing, token issuing and the service)
//! knows nothing about HTTP; `handlers` adapts it to axum.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── validation.rs   - Registration and login input checks
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuing and verification
//! ├── users.rs        - User model, CredentialStore trait, in-memory store
//! ├── db.rs           - SQLite CredentialStore
//! ├── service.rs      - AuthService orchestrating the flows
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → validated → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: bearer token → verified → user profile returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs and expire after 24 hours by default
//! - Password hashes never leave the store layer in responses
//! - Passwords are never logged

/// Input validation
pub mod validation;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and credential store abstraction
pub mod users;

/// SQLite credential store
pub mod db;

/// Auth flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use db::SqliteUserStore;
pub use handlers::{get_me, list_users, login, register};
pub use password::PasswordHasher;
pub use service::AuthService;
pub use sessions::{Claims, TokenIssuer, TokenVerifier};
pub use users::{CredentialStore, InMemoryUserStore, NewUser, StoreError, User};
