// src/recipe/registry.rs

//! Entry registry
//!
//! Stores every registered ingredient and recipe by name. Entries are only
//! ever added: an accepted entry is never replaced or removed.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use super::{Entry, EntrySpec, Ingredient, Recipe};

/// Reasons an entry is refused by the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    #[error("Entry '{0}' is already registered")]
    DuplicateName(String),

    #[error("Recipe '{recipe}' lists required item '{item}' more than once")]
    DuplicateRequiredItem { recipe: String, item: String },

    #[error("Recipe '{recipe}' requires zero of '{item}'")]
    InvalidQuantity { recipe: String, item: String },

    #[error("Ingredient '{name}' has negative cook time {cook_time}")]
    NegativeCookTime { name: String, cook_time: i64 },
}

/// Registry of cookbook entries keyed by exact name
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, Entry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store an entry
    ///
    /// Checks run in this order, the first failure wins:
    /// 1. The name is not registered yet
    /// 2. A recipe names each required item once
    /// 3. A recipe requires at least one of each item
    /// 4. An ingredient's cook time is not negative
    ///
    /// Required items are not looked up here. They only need to exist by
    /// the time the recipe is resolved.
    pub fn insert(&mut self, spec: EntrySpec) -> Result<(), InsertError> {
        if self.entries.contains_key(spec.name()) {
            return Err(InsertError::DuplicateName(spec.name().to_string()));
        }

        let entry = match spec {
            EntrySpec::Recipe {
                name,
                required_items,
            } => {
                let mut seen = HashSet::with_capacity(required_items.len());
                for item in &required_items {
                    if !seen.insert(item.name.as_str()) {
                        return Err(InsertError::DuplicateRequiredItem {
                            recipe: name,
                            item: item.name.clone(),
                        });
                    }
                }

                if let Some(item) = required_items.iter().find(|item| item.quantity == 0) {
                    return Err(InsertError::InvalidQuantity {
                        recipe: name,
                        item: item.name.clone(),
                    });
                }

                Entry::Recipe(Recipe {
                    name,
                    required_items,
                })
            }
            EntrySpec::Ingredient { name, cook_time } => {
                let Ok(cook_time) = u64::try_from(cook_time) else {
                    return Err(InsertError::NegativeCookTime { name, cook_time });
                };
                Entry::Ingredient(Ingredient { name, cook_time })
            }
        };

        debug!("Registered {} '{}'", entry.kind(), entry.name());
        self.entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    /// Look up an entry by exact name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Check if an entry is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of all registered entries, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
