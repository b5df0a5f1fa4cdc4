/**
 * API Routes
 *
 * ## Authentication Routes
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `GET /auth/me` - Current user (requires bearer token)
 *
 * ## User Routes
 * - `GET /users` - All user profiles
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, list_users, login, register};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
        // User endpoints
        .route("/users", get(list_users))
}
