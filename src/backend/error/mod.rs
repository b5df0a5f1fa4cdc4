//! Backend Error Module
//!
//! - **`types`** - `AuthError` and its status code mapping
//! - **`conversion`** - `IntoResponse` implementation (`{"message": ...}` bodies)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
