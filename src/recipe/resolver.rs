// src/recipe/resolver.rs

//! Recipe resolution
//!
//! Expands a recipe into the total cook time and the total quantity of every
//! base ingredient it needs. Nested recipes are expanded depth-first, with
//! quantities multiplied down the tree:
//!
//! ```text
//! Breakfast -> 2 x Omelette -> 3 x Egg (cook time 5)
//!           -> 1 x Toast    (cook time 10)
//!
//! cook time = 2*3*5 + 1*10 = 40, ingredients = { Egg: 6, Toast: 1 }
//! ```
//!
//! Resolution is read-only. The first problem found anywhere in the tree
//! aborts the whole resolution and nothing partial is returned.
//!
//! # Cycles
//!
//! The chain of recipes currently being expanded is tracked. A recipe that
//! requires itself, directly or through other recipes, is reported as a
//! [`ResolveError::CyclicReference`]. The same recipe reached through two
//! separate branches (a diamond) is not a cycle and is expanded once per
//! branch.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{Entry, Ingredient, Recipe, Registry};

/// Default limit on how many recipes deep an expansion may nest
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Highest depth limit a resolver accepts
///
/// Expansion recurses once per nested recipe, so this caps stack use.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Reasons a recipe cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The name is unknown or belongs to an ingredient
    #[error("No recipe named '{0}'")]
    NotFound(String),

    #[error("Recipe '{recipe}' requires unknown entry '{missing}'")]
    MissingReference { recipe: String, missing: String },

    #[error("Recipe cycle detected: {}", cycle.join(" -> "))]
    CyclicReference { cycle: Vec<String> },

    #[error("Recipe '{recipe}' nests deeper than {limit} recipes")]
    DepthExceeded { recipe: String, limit: usize },

    #[error("Totals for recipe '{recipe}' overflow")]
    Overflow { recipe: String },
}

/// Total quantity of one base ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: u64,
}

/// Fully expanded cost of a recipe
///
/// Serializes as the `GET /entry` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionSummary {
    pub name: String,
    pub cook_time: u64,
    /// Ingredients in the order the expansion first reached them
    pub ingredients: Vec<IngredientQuantity>,
}

/// Running totals for one resolution
#[derive(Default)]
struct Expansion<'a> {
    cook_time: u64,
    ingredients: IndexMap<&'a str, u64>,
    /// Recipes on the current expansion path, outermost first
    path: Vec<&'a str>,
}

impl<'a> Expansion<'a> {
    fn add_ingredient(&mut self, ingredient: &'a Ingredient, multiplier: u64) -> Option<()> {
        let cook_time = ingredient.cook_time.checked_mul(multiplier)?;
        self.cook_time = self.cook_time.checked_add(cook_time)?;

        let quantity = self.ingredients.entry(ingredient.name.as_str()).or_insert(0);
        *quantity = quantity.checked_add(multiplier)?;
        Some(())
    }
}

/// Resolves recipes against a borrowed [`Registry`]
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
    max_depth: usize,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with the default depth limit
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how many recipes deep an expansion may nest
    ///
    /// Values above [`MAX_DEPTH_LIMIT`] are clamped to it.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Resolve a recipe into its total cook time and base ingredients
    pub fn resolve(&self, name: &str) -> Result<ResolutionSummary, ResolveError> {
        let registry = self.registry;
        let recipe = match registry.get(name) {
            Some(Entry::Recipe(recipe)) => recipe,
            _ => return Err(ResolveError::NotFound(name.to_string())),
        };

        let mut expansion = Expansion::default();
        self.expand(recipe, 1, &mut expansion)?;

        debug!(
            "Resolved '{}': cook time {}, {} ingredients",
            recipe.name,
            expansion.cook_time,
            expansion.ingredients.len()
        );

        Ok(ResolutionSummary {
            name: recipe.name.clone(),
            cook_time: expansion.cook_time,
            ingredients: expansion
                .ingredients
                .into_iter()
                .map(|(name, quantity)| IngredientQuantity {
                    name: name.to_string(),
                    quantity,
                })
                .collect(),
        })
    }

    fn expand(
        &self,
        recipe: &'a Recipe,
        multiplier: u64,
        expansion: &mut Expansion<'a>,
    ) -> Result<(), ResolveError> {
        if let Some(start) = expansion.path.iter().position(|name| *name == recipe.name) {
            let mut cycle: Vec<String> = expansion.path[start..]
                .iter()
                .map(|name| name.to_string())
                .collect();
            cycle.push(recipe.name.clone());
            return Err(ResolveError::CyclicReference { cycle });
        }

        if expansion.path.len() >= self.max_depth {
            return Err(ResolveError::DepthExceeded {
                recipe: recipe.name.clone(),
                limit: self.max_depth,
            });
        }

        expansion.path.push(&recipe.name);

        let registry = self.registry;
        for item in &recipe.required_items {
            let child = registry.get(&item.name).ok_or_else(|| {
                ResolveError::MissingReference {
                    recipe: recipe.name.clone(),
                    missing: item.name.clone(),
                }
            })?;

            let overflow = || ResolveError::Overflow {
                recipe: recipe.name.clone(),
            };
            let child_multiplier = multiplier.checked_mul(item.quantity).ok_or_else(overflow)?;

            match child {
                Entry::Ingredient(ingredient) => expansion
                    .add_ingredient(ingredient, child_multiplier)
                    .ok_or_else(overflow)?,
                Entry::Recipe(child) => self.expand(child, child_multiplier, expansion)?,
            }
        }

        expansion.path.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{EntrySpec, RequiredItem};

    fn recipe(name: &str, items: &[(&str, u64)]) -> EntrySpec {
        EntrySpec::recipe(
            name,
            items
                .iter()
                .map(|(item, quantity)| RequiredItem::new(*item, *quantity))
                .collect(),
        )
    }

    fn registry_with(specs: Vec<EntrySpec>) -> Registry {
        let mut registry = Registry::new();
        for spec in specs {
            registry.insert(spec).unwrap();
        }
        registry
    }

    fn quantities(summary: &ResolutionSummary) -> Vec<(&str, u64)> {
        summary
            .ingredients
            .iter()
            .map(|i| (i.name.as_str(), i.quantity))
            .collect()
    }

    #[test]
    fn test_nested_multipliers() {
        let registry = registry_with(vec![
            recipe("R", &[("A", 2), ("B", 1)]),
            recipe("A", &[("C", 3)]),
            EntrySpec::ingredient("C", 5),
            EntrySpec::ingredient("B", 10),
        ]);

        let summary = Resolver::new(&registry).resolve("R").unwrap();
        assert_eq!(summary.name, "R");
        assert_eq!(summary.cook_time, 40);
        assert_eq!(quantities(&summary), vec![("C", 6), ("B", 1)]);
    }

    #[test]
    fn test_ingredient_reached_twice_accumulates() {
        let registry = registry_with(vec![
            recipe("Sandwich", &[("Bread", 2), ("Filling", 1)]),
            recipe("Filling", &[("Bread", 1), ("Cheese", 2)]),
            EntrySpec::ingredient("Bread", 1),
            EntrySpec::ingredient("Cheese", 3),
        ]);

        let summary = Resolver::new(&registry).resolve("Sandwich").unwrap();
        assert_eq!(summary.cook_time, 2 + 1 + 6);
        assert_eq!(quantities(&summary), vec![("Bread", 3), ("Cheese", 2)]);
    }

    #[test]
    fn test_empty_recipe() {
        let registry = registry_with(vec![recipe("Air", &[])]);
        let summary = Resolver::new(&registry).resolve("Air").unwrap();
        assert_eq!(summary.cook_time, 0);
        assert!(summary.ingredients.is_empty());
    }

    #[test]
    fn test_unknown_name_not_found() {
        let registry = Registry::new();
        assert_eq!(
            Resolver::new(&registry).resolve("Ghost"),
            Err(ResolveError::NotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn test_ingredient_is_not_resolvable() {
        let registry = registry_with(vec![EntrySpec::ingredient("Egg", 6)]);
        assert_eq!(
            Resolver::new(&registry).resolve("Egg"),
            Err(ResolveError::NotFound("Egg".to_string()))
        );
    }

    #[test]
    fn test_missing_reference() {
        let registry = registry_with(vec![
            recipe("Pie", &[("Crust", 1), ("Filling", 1)]),
            EntrySpec::ingredient("Crust", 20),
        ]);

        let err = Resolver::new(&registry).resolve("Pie").unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingReference {
                recipe: "Pie".to_string(),
                missing: "Filling".to_string(),
            }
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_missing_reference_deep_in_tree() {
        let registry = registry_with(vec![
            recipe("Top", &[("Middle", 2)]),
            recipe("Middle", &[("Bottom", 1)]),
        ]);

        let err = Resolver::new(&registry).resolve("Top").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingReference { ref recipe, ref missing }
                if recipe == "Middle" && missing == "Bottom"
        ));
    }

    #[test]
    fn test_self_reference_is_cycle() {
        let registry = registry_with(vec![recipe("Ouroboros", &[("Ouroboros", 1)])]);

        let err = Resolver::new(&registry).resolve("Ouroboros").unwrap_err();
        assert_eq!(
            err,
            ResolveError::CyclicReference {
                cycle: vec!["Ouroboros".to_string(), "Ouroboros".to_string()],
            }
        );
    }

    #[test]
    fn test_mutual_reference_is_cycle() {
        let registry = registry_with(vec![
            recipe("Dinner", &[("Chicken", 1)]),
            recipe("Chicken", &[("Egg", 2)]),
            recipe("Egg", &[("Chicken", 1)]),
        ]);

        let err = Resolver::new(&registry).resolve("Dinner").unwrap_err();
        assert_eq!(
            err,
            ResolveError::CyclicReference {
                cycle: vec![
                    "Chicken".to_string(),
                    "Egg".to_string(),
                    "Chicken".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_diamond_is_not_cycle() {
        let registry = registry_with(vec![
            recipe("Feast", &[("Left", 1), ("Right", 2)]),
            recipe("Left", &[("Base", 1)]),
            recipe("Right", &[("Base", 3)]),
            recipe("Base", &[("Flour", 2)]),
            EntrySpec::ingredient("Flour", 4),
        ]);

        let summary = Resolver::new(&registry).resolve("Feast").unwrap();
        // Flour: 1*1*2 + 2*3*2 = 14
        assert_eq!(quantities(&summary), vec![("Flour", 14)]);
        assert_eq!(summary.cook_time, 14 * 4);
    }

    #[test]
    fn test_depth_limit() {
        let registry = registry_with(vec![
            recipe("L1", &[("L2", 1)]),
            recipe("L2", &[("L3", 1)]),
            recipe("L3", &[("Salt", 1)]),
            EntrySpec::ingredient("Salt", 1),
        ]);

        assert!(Resolver::new(&registry).with_max_depth(3).resolve("L1").is_ok());

        let err = Resolver::new(&registry)
            .with_max_depth(2)
            .resolve("L1")
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::DepthExceeded {
                recipe: "L3".to_string(),
                limit: 2,
            }
        );
    }

    #[test]
    fn test_depth_limit_is_clamped() {
        let mut specs: Vec<EntrySpec> = (0..2000)
            .map(|i| recipe(&format!("R{}", i), &[(&format!("R{}", i + 1), 1)]))
            .collect();
        specs.push(EntrySpec::ingredient("R2000", 1));
        let registry = registry_with(specs);

        let err = Resolver::new(&registry)
            .with_max_depth(1_000_000)
            .resolve("R0")
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::DepthExceeded {
                recipe: format!("R{}", MAX_DEPTH_LIMIT),
                limit: MAX_DEPTH_LIMIT,
            }
        );
    }

    #[test]
    fn test_overflow_reported() {
        let registry = registry_with(vec![
            recipe("Huge", &[("Bigger", u64::MAX)]),
            recipe("Bigger", &[("Grain", 2)]),
            EntrySpec::ingredient("Grain", 1),
        ]);

        let err = Resolver::new(&registry).resolve("Huge").unwrap_err();
        assert_eq!(
            err,
            ResolveError::Overflow {
                recipe: "Bigger".to_string(),
            }
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let registry = registry_with(vec![
            recipe("Stew", &[("Carrot", 3), ("Broth", 1), ("Potato", 2)]),
            recipe("Broth", &[("Water", 4), ("Carrot", 1)]),
            EntrySpec::ingredient("Carrot", 2),
            EntrySpec::ingredient("Potato", 5),
            EntrySpec::ingredient("Water", 0),
        ]);

        let resolver = Resolver::new(&registry);
        let first = resolver.resolve("Stew").unwrap();
        for _ in 0..5 {
            assert_eq!(resolver.resolve("Stew").unwrap(), first);
        }
        assert_eq!(
            quantities(&first),
            vec![("Carrot", 4), ("Water", 4), ("Potato", 2)]
        );
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = ResolutionSummary {
            name: "R".to_string(),
            cook_time: 40,
            ingredients: vec![IngredientQuantity {
                name: "C".to_string(),
                quantity: 6,
            }],
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "R",
                "cookTime": 40,
                "ingredients": [{ "name": "C", "quantity": 6 }]
            })
        );
    }
}
