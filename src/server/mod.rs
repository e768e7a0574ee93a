// src/server/mod.rs
//! Cookbook HTTP server
//!
//! Thin axum front end over a single shared [`Registry`]:
//! - `POST /entry` registers an ingredient or recipe
//! - `GET /entry?name=` (and `GET /summary?name=`) resolves a recipe
//! - `GET /entries` lists registered names
//! - `POST /parse` normalizes a hand-written recipe name
//!
//! The registry sits behind a reader-writer lock: registration takes the
//! write side, resolution and listing take the read side. Nothing awaits
//! while a lock is held.

mod config;
mod handlers;
mod routes;

pub use config::{CookbookConfig, ResolverSection, ServerSection};
pub use handlers::{ApiError, ApiResult};
pub use routes::create_router;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::recipe::{Registry, Resolver, DEFAULT_MAX_DEPTH};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Deepest recipe nesting a resolution may reach
    pub max_depth: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub registry: Registry,
}

/// Handle to the state shared by all handlers
pub type SharedState = Arc<RwLock<ServerState>>;

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_registry(config, Registry::new())
    }

    /// Start from an already populated registry
    pub fn with_registry(config: ServerConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    /// Resolver over the current registry honoring the configured depth limit
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry).with_max_depth(self.config.max_depth)
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }
}

/// Start the cookbook server
pub async fn run_server(config: ServerConfig, registry: Registry) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);
    tracing::info!("Resolver depth limit: {}", config.max_depth);
    if !registry.is_empty() {
        tracing::info!("Serving {} preloaded entries", registry.len());
    }

    let bind_addr = config.bind_addr;
    let state = ServerState::with_registry(config, registry).into_shared();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Cookbook is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
