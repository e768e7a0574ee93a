// src/server/handlers/entries.rs
//! Entry registration and recipe summary handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResult};
use crate::recipe::{EntrySpec, ResolutionSummary};
use crate::server::SharedState;

/// Query parameters for recipe summaries
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// Register an ingredient or recipe
///
/// POST /entry
pub async fn create_entry(
    State(state): State<SharedState>,
    payload: Result<Json<EntrySpec>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(spec) = payload?;
    state.write().await.registry.insert(spec)?;
    Ok(StatusCode::OK)
}

/// Resolve a recipe into its total cook time and ingredients
///
/// GET /entry?name=
pub async fn get_summary(
    State(state): State<SharedState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> ApiResult<Json<ResolutionSummary>> {
    let Query(query) = query?;
    let name = query
        .name
        .ok_or_else(|| ApiError::Malformed("missing 'name' query parameter".to_string()))?;

    let summary = state.read().await.resolver().resolve(&name)?;
    Ok(Json(summary))
}

/// List the names of all registered entries
///
/// GET /entries
pub async fn list_entries(State(state): State<SharedState>) -> Json<Vec<String>> {
    let state = state.read().await;
    Json(
        state
            .registry
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
