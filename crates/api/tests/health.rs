//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let response = get(common::build_test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(common::build_test_app(), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(common::build_test_app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_allows_console_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/products/validate")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = common::build_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header");
    assert_eq!(allow_origin, "http://localhost:5173");
}

#[tokio::test]
async fn invalid_cors_origin_fails_router_build() {
    let mut config = common::test_config();
    config.cors_origins = vec!["not a\nheader".to_string()];
    let state = ordena_api::state::AppState {
        config: std::sync::Arc::new(config.clone()),
    };
    assert!(ordena_api::router::build_app_router(state, &config).is_err());
}
