//! Core domain types for the alchemy workshop.
//!
//! This module defines the fundamental types used throughout the system:
//! - Recipes (a potion name and its ingredients)
//! - Stock levels for a single potion

use serde::{Deserialize, Serialize};

// ============================================================================
// Recipe Types
// ============================================================================

/// A named potion recipe.
///
/// Recipes are immutable once built; the catalog hands out shared borrows only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

impl Recipe {
    /// Build a recipe, copying the ingredient list as given (order and duplicates kept)
    pub fn new(name: impl Into<String>, ingredients: &[String]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Whether any ingredient equals `ingredient` exactly
    pub fn uses(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }
}

// ============================================================================
// Stock Types
// ============================================================================

/// Logical state of one stock entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Count equals the maximum; returns are blocked
    AtMax,
    /// Strictly between zero and the maximum
    Partial,
    /// Count is zero; dispensing is blocked
    Empty,
}

impl StockLevel {
    /// Classify a count against the given ceiling
    pub fn of(count: u32, max: u32) -> Self {
        if count == 0 {
            StockLevel::Empty
        } else if count >= max {
            StockLevel::AtMax
        } else {
            StockLevel::Partial
        }
    }
}

/// One row of a stock snapshot
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockRow<'a> {
    pub name: &'a str,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_keeps_ingredient_order_and_duplicates() {
        let ingredients = vec!["herb".to_string(), "water".to_string(), "herb".to_string()];
        let recipe = Recipe::new("Heal", &ingredients);
        assert_eq!(recipe.name(), "Heal");
        assert_eq!(recipe.ingredients(), ingredients.as_slice());
        assert!(recipe.uses("water"));
        assert!(!recipe.uses("Water"));
    }

    #[test]
    fn test_stock_level_classification() {
        assert_eq!(StockLevel::of(0, 3), StockLevel::Empty);
        assert_eq!(StockLevel::of(1, 3), StockLevel::Partial);
        assert_eq!(StockLevel::of(2, 3), StockLevel::Partial);
        assert_eq!(StockLevel::of(3, 3), StockLevel::AtMax);
    }

    #[test]
    fn test_recipe_deserializes_without_ingredients() {
        let recipe: Recipe = serde_json::from_str(r#"{"name":"Plain"}"#).unwrap();
        assert!(recipe.ingredients().is_empty());
    }
}
