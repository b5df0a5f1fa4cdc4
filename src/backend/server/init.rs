/**
 * Server Initialization
 *
 * Builds the application from configuration:
 *
 * 1. Open the credential store
 * 2. Wire the auth service and token verifier into `AppState`
 * 3. Assemble the router with CORS and request tracing
 */

use axum::Router;

use crate::backend::auth::users::StoreError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create the Axum app
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing auth server");

    let store = load_store(config).await?;
    let app_state = AppState::new(store, config);

    Ok(create_router(app_state))
}
