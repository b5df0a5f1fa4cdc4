/**
 * Store Configuration
 *
 * Picks the credential store at startup.
 *
 * - `DATABASE_URL` set: SQLite store, migrations applied on connect
 * - `DATABASE_URL` unset: in-memory store (data lost on restart)
 *
 * A configured database that cannot be opened is a startup error; the
 * server does not silently fall back to memory in that case.
 */

use std::sync::Arc;

use crate::backend::auth::db::SqliteUserStore;
use crate::backend::auth::users::{CredentialStore, InMemoryUserStore, StoreError};
use crate::shared::AppConfig;

/// Load and initialize the credential store
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn CredentialStore>, StoreError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory user store.");
        return Ok(Arc::new(InMemoryUserStore::new()));
    };

    tracing::info!("Connecting to database...");
    let store = SqliteUserStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to open database: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    Ok(Arc::new(store))
}
