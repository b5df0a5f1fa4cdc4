/**
 * Router Assembly
 *
 * 1. **API Routes**: auth and user endpoints
 * 2. **Fallback Handler**: 404 with a JSON body
 * 3. **Layers**: request tracing, permissive CORS
 */

use axum::{http::StatusCode, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(|| async {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "Not found." })),
        )
    });

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
