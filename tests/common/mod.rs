// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use cookbook::server::{create_router, ServerConfig, ServerState};
use serde_json::Value;
use tower::ServiceExt;

/// Build a router over an empty registry.
pub fn test_app() -> Router {
    test_app_with_config(ServerConfig::default())
}

pub fn test_app_with_config(config: ServerConfig) -> Router {
    create_router(ServerState::new(config).into_shared())
}

/// Send one request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Register an entry and assert it was accepted.
pub async fn register(app: &Router, entry: Value) {
    let response = post_json(app, "/entry", entry).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Register the nested example cookbook:
/// `R -> 2 x A, 1 x B`, `A -> 3 x C`, `C` takes 5, `B` takes 10.
pub async fn register_nested_example(app: &Router) {
    register(
        app,
        serde_json::json!({
            "type": "recipe",
            "name": "R",
            "requiredItems": [{ "name": "A", "quantity": 2 }, { "name": "B", "quantity": 1 }]
        }),
    )
    .await;
    register(
        app,
        serde_json::json!({
            "type": "recipe",
            "name": "A",
            "requiredItems": [{ "name": "C", "quantity": 3 }]
        }),
    )
    .await;
    register(
        app,
        serde_json::json!({ "type": "ingredient", "name": "C", "cookTime": 5 }),
    )
    .await;
    register(
        app,
        serde_json::json!({ "type": "ingredient", "name": "B", "cookTime": 10 }),
    )
    .await;
}
