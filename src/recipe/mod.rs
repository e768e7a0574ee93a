// src/recipe/mod.rs

//! Cookbook entries, the registry that stores them, and recipe resolution
//!
//! # Entries
//!
//! - **Ingredient**: an atomic entry with a fixed cook time
//! - **Recipe**: a list of required entries, each with a quantity
//!
//! A recipe refers to its required items by name only. Those names are
//! looked up when a recipe is resolved, so a recipe may be registered before
//! the entries it needs.
//!
//! # Example
//!
//! ```
//! use cookbook::recipe::{EntrySpec, Registry, RequiredItem, Resolver};
//!
//! let mut registry = Registry::new();
//! registry.insert(EntrySpec::ingredient("Egg", 6)).unwrap();
//! registry
//!     .insert(EntrySpec::recipe("Omelette", vec![RequiredItem::new("Egg", 3)]))
//!     .unwrap();
//!
//! let summary = Resolver::new(&registry).resolve("Omelette").unwrap();
//! assert_eq!(summary.cook_time, 18);
//! ```

mod registry;
mod resolver;

pub use registry::{InsertError, Registry};
pub use resolver::{
    IngredientQuantity, ResolutionSummary, ResolveError, Resolver, DEFAULT_MAX_DEPTH,
    MAX_DEPTH_LIMIT,
};

use serde::{Deserialize, Serialize};

/// A reference from a recipe to another entry, with the amount required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    /// Name of the required entry (may not be registered yet)
    pub name: String,
    /// How many of the entry one unit of the recipe needs
    pub quantity: u64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A stored ingredient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A validated entry held by the [`Registry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// Name the entry is registered under
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    /// Kind of entry, as used on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ingredient(_) => "ingredient",
            Self::Recipe(_) => "recipe",
        }
    }
}

/// An unvalidated request to register an entry
///
/// This is the `POST /entry` body:
///
/// ```json
/// { "type": "ingredient", "name": "Egg", "cookTime": 6 }
/// { "type": "recipe", "name": "Omelette", "requiredItems": [{ "name": "Egg", "quantity": 3 }] }
/// ```
///
/// The cook time is signed so negative values are rejected by the registry
/// rather than by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntrySpec {
    #[serde(rename_all = "camelCase")]
    Recipe {
        name: String,
        required_items: Vec<RequiredItem>,
    },
    #[serde(rename_all = "camelCase")]
    Ingredient { name: String, cook_time: i64 },
}

impl EntrySpec {
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self::Ingredient {
            name: name.into(),
            cook_time,
        }
    }

    pub fn recipe(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Self::Recipe {
            name: name.into(),
            required_items,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Recipe { name, .. } | Self::Ingredient { name, .. } => name,
        }
    }
}
