// src/seed.rs

//! Loading entries from a JSON file
//!
//! A seed file is a JSON array of `POST /entry` bodies. Entries are inserted
//! in file order, so the same rejections apply as over HTTP.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::recipe::{EntrySpec, Registry};

/// Read entry specs from a JSON file
pub fn read_entry_specs(path: &Path) -> Result<Vec<EntrySpec>> {
    let content = std::fs::read_to_string(path)?;
    let specs: Vec<EntrySpec> = serde_json::from_str(&content)?;
    Ok(specs)
}

/// Insert specs into a registry in order, stopping at the first rejection
pub fn insert_all(registry: &mut Registry, specs: Vec<EntrySpec>) -> Result<usize> {
    let count = specs.len();
    for spec in specs {
        registry.insert(spec)?;
    }
    Ok(count)
}

/// Build a registry from a seed file
pub fn load_registry(path: &Path) -> Result<Registry> {
    let mut registry = Registry::new();
    let count = insert_all(&mut registry, read_entry_specs(path)?)?;
    info!("Loaded {} entries from {}", count, path.display());
    Ok(registry)
}
