//! Server Module
//!
//! Startup wiring for the HTTP server: store selection, application state
//! and app construction.

/// Application state management
pub mod state;

/// Store selection
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
