//! Middleware Module
//!
//! Request processing ahead of the handlers.
//!
//! - **`auth`** - bearer-token extractor for protected routes

pub mod auth;

pub use auth::{bearer_token, AuthUser, AuthenticatedUser};
