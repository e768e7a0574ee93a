// src/server/handlers/parse.rs
//! Recipe name normalization handler

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::normalize;

/// Body returned on failure, as plain text
pub const INVALID_NAME: &str = "Invalid recipe name";

/// Request body for name normalization
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Raw hand-written name; absent means empty
    #[serde(default)]
    pub input: String,
}

/// Response for a successfully normalized name
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Normalize a hand-written recipe name
///
/// POST /parse
pub async fn parse_name(payload: Result<Json<ParseRequest>, JsonRejection>) -> Response {
    let input = match payload {
        Ok(Json(request)) => request.input,
        Err(rejection) => {
            debug!("Malformed parse request: {}", rejection.body_text());
            return (StatusCode::BAD_REQUEST, INVALID_NAME).into_response();
        }
    };

    match normalize(&input) {
        Ok(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        Err(e) => {
            debug!("{}", e);
            (StatusCode::BAD_REQUEST, INVALID_NAME).into_response()
        }
    }
}
