#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ordena_api::config::ServerConfig;
use ordena_api::router::build_app_router;
use ordena_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_body_bytes: 2 * 1024 * 1024,
        max_snapshot_records: 50,
    }
}

/// Build the full application router with all middleware layers, exactly
/// as the binary does.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config).expect("test config builds a router")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

/// A product that passes validation against an empty inventory.
pub fn hammer() -> Value {
    serde_json::json!({
        "name": "Martillo 16oz",
        "code": "MAR-001",
        "brand": "Truper",
        "category": "Herramientas",
        "stock": 10,
        "stockMin": 5,
        "stockMax": 50,
        "description": "Martillo de acero forjado"
    })
}
