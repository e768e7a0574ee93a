// src/error.rs

//! Crate-level error type
//!
//! Each component reports its own error enum. This type collects them so
//! callers that drive several components (the CLI, seed loading) can use a
//! single `Result`.

use thiserror::Error;

use crate::recipe::{InsertError, ResolveError};

/// Errors produced by the cookbook library
#[derive(Debug, Error)]
pub enum Error {
    /// An entry was rejected by the registry
    #[error("Insert error: {0}")]
    Insert(#[from] InsertError),

    /// A recipe could not be resolved
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;
