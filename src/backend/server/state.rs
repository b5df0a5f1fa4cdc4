/**
 * Application State Management
 *
 * `AppState` is the central state container handed to the router. It holds
 * the auth service and the token verifier, both behind `Arc` and both
 * immutable after startup.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract only the part of
 * the state they need, following Axum's recommended pattern.
 *
 * ```rust,ignore
 * async fn handler(State(auth): State<Arc<AuthService>>) { /* ... */ }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenVerifier;
use crate::backend::auth::users::CredentialStore;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    /// Register, login and current-user flows
    pub auth: Arc<AuthService>,

    /// Verifies bearer tokens on protected routes
    pub tokens: Arc<TokenVerifier>,
}

impl AppState {
    /// Wire the service and verifier from configuration over a store
    pub fn new(store: Arc<dyn CredentialStore>, config: &AppConfig) -> Self {
        Self {
            auth: Arc::new(AuthService::from_config(store, config)),
            tokens: Arc::new(TokenVerifier::from_config(config)),
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<TokenVerifier> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
