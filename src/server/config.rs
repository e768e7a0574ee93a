// src/server/config.rs
//! Configuration file parsing for the cookbook server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [resolver] - Recipe expansion limits
//!
//! Every setting has a default, so an empty file is a valid configuration.

use crate::recipe::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CookbookConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Resolver settings
    #[serde(default)]
    pub resolver: ResolverSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// HTTP bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

/// Resolver configuration section
#[derive(Debug, Deserialize)]
pub struct ResolverSection {
    /// Deepest recipe nesting a resolution may reach
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl CookbookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CookbookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        if self.resolver.max_depth == 0 {
            anyhow::bail!("resolver.max_depth must be at least 1");
        }
        if self.resolver.max_depth > MAX_DEPTH_LIMIT {
            anyhow::bail!(
                "resolver.max_depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT,
                self.resolver.max_depth
            );
        }

        Ok(())
    }

    /// Parsed bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        Ok(ServerConfig {
            bind_addr: self.bind_addr()?,
            max_depth: self.resolver.max_depth,
        })
    }
}
