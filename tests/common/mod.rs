//! Common test utilities and helpers
//!
//! - Test configuration (fast bcrypt, fixed secret)
//! - App and service construction over either store
//! - Request helpers for driving the router without a socket

#![allow(dead_code)]

use std::sync::Arc;

use authcore::backend::auth::{AuthService, CredentialStore, InMemoryUserStore, SqliteUserStore};
use authcore::backend::routes::create_router;
use authcore::backend::AppState;
use authcore::shared::AppConfig;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("valid test config")
}

pub fn memory_store() -> Arc<dyn CredentialStore> {
    Arc::new(InMemoryUserStore::new())
}

pub async fn sqlite_store() -> Arc<dyn CredentialStore> {
    Arc::new(
        SqliteUserStore::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database"),
    )
}

pub fn service(store: Arc<dyn CredentialStore>) -> AuthService {
    AuthService::from_config(store, &test_config())
}

/// Router over an in-memory store
pub fn test_app() -> Router {
    create_router(AppState::new(memory_store(), &test_config()))
}

/// Send a request and decode the JSON response body
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, auth_header(token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, json)
}

pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    send(app, Method::POST, path, Some(body), None).await
}

/// Register through the API and return the session body
pub async fn register_user(app: &Router, name: &str, email: &str, password: &str) -> serde_json::Value {
    let (status, body) = post_json(
        app,
        "/auth/register",
        serde_json::json!({ "name": name, "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "registration failed: {}", body);
    body
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
