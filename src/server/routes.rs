// src/server/routes.rs
//! Axum router configuration for the cookbook server

use crate::server::handlers::{entries, parse};
use crate::server::SharedState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Registration and resolution
        .route(
            "/entry",
            post(entries::create_entry).get(entries::get_summary),
        )
        .route("/summary", get(entries::get_summary))
        .route("/entries", get(entries::list_entries))
        // Name normalization
        .route("/parse", post(parse::parse_name))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
