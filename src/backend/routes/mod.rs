//! Routes Module
//!
//! - **`api_routes`** - auth and user endpoints
//! - **`router`** - router assembly, fallback and layers

/// API route configuration
pub mod api_routes;

/// Main router assembly
pub mod router;

pub use router::create_router;
