// src/server/handlers/mod.rs
//! HTTP request handlers for the cookbook server

pub mod entries;
pub mod parse;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::recipe::{InsertError, ResolveError};

/// A request the server refuses
///
/// Clients only ever see a bare 400. The reason is logged at debug level.
#[derive(Debug)]
pub enum ApiError {
    /// Registry or resolver rejected the request
    Rejected(crate::Error),
    /// The request could not be decoded
    Malformed(String),
}

impl From<InsertError> for ApiError {
    fn from(err: InsertError) -> Self {
        ApiError::Rejected(err.into())
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        ApiError::Rejected(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Rejected(err) => debug!("Request rejected: {}", err),
            ApiError::Malformed(reason) => debug!("Malformed request: {}", reason),
        }
        StatusCode::BAD_REQUEST.into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
