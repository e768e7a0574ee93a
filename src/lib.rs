// src/lib.rs

//! Cookbook
//!
//! In-memory cookbook of ingredients and recipes, with recursive cost
//! resolution and a normalizer for hand-written recipe names.
//!
//! # Architecture
//!
//! - Registry: append-only store of entries keyed by exact name
//! - Resolver: depth-first expansion of a recipe into total cook time and
//!   base ingredient quantities, with cycle and depth guards
//! - Normalizer: pure function that canonicalizes free-form names
//! - Server (feature `server`): axum front end over a shared registry

mod error;
pub mod normalize;
pub mod recipe;
pub mod seed;

#[cfg(feature = "server")]
pub mod server;

pub use error::{Error, Result};
pub use normalize::{normalize, NameParseError};
pub use recipe::{
    Entry, EntrySpec, IngredientQuantity, InsertError, Registry, RequiredItem,
    ResolutionSummary, ResolveError, Resolver,
};
