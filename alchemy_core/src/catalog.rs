//! Recipe catalog.
//!
//! Recipes are kept in registration order and looked up by a linear scan.
//! Names are unique under exact, case-sensitive comparison.

use crate::{Recipe, WorkshopError};

/// The set of registered recipes
#[derive(Clone, Debug, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a recipe, returning `false` if the name is already taken
    pub fn add_recipe(&mut self, name: &str, ingredients: &[String]) -> bool {
        self.try_add_recipe(name, ingredients).is_ok()
    }

    /// Register a recipe
    ///
    /// An empty ingredient list is accepted here; callers that require at
    /// least one ingredient must check before calling.
    pub fn try_add_recipe(
        &mut self,
        name: &str,
        ingredients: &[String],
    ) -> Result<(), WorkshopError> {
        if self.contains(name) {
            tracing::warn!("Recipe '{}' already exists, not adding", name);
            return Err(WorkshopError::DuplicateName(name.to_string()));
        }

        self.recipes.push(Recipe::new(name, ingredients));
        tracing::info!(
            "Added recipe '{}' with {} ingredient(s)",
            name,
            ingredients.len()
        );
        Ok(())
    }

    /// Look up a recipe by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name() == name)
    }

    /// All recipes using `ingredient`, in registration order
    pub fn find_by_ingredient(&self, ingredient: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.uses(ingredient)).collect()
    }

    pub fn list_all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_catalog() -> RecipeCatalog {
        let mut catalog = RecipeCatalog::new();
        assert!(catalog.add_recipe("Heal", &strings(&["herb", "water"])));
        assert!(catalog.add_recipe("Fire", &strings(&["sulfur", "herb"])));
        catalog
    }

    #[test]
    fn test_duplicate_name_rejected_and_original_kept() {
        let mut catalog = sample_catalog();

        assert!(!catalog.add_recipe("Heal", &strings(&["gold"])));
        assert_eq!(catalog.len(), 2);

        let heal = catalog.find_by_name("Heal").unwrap();
        assert_eq!(heal.ingredients(), strings(&["herb", "water"]).as_slice());
    }

    #[test]
    fn test_try_add_reports_duplicate_name() {
        let mut catalog = sample_catalog();
        assert_eq!(
            catalog.try_add_recipe("Fire", &[]),
            Err(WorkshopError::DuplicateName("Fire".into()))
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut catalog = sample_catalog();
        assert!(catalog.add_recipe("heal", &strings(&["herb"])));
        assert!(catalog.find_by_name("HEAL").is_none());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_find_by_name() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_by_name("Fire").map(Recipe::name), Some("Fire"));
        assert!(catalog.find_by_name("Ice").is_none());
    }

    #[test]
    fn test_find_by_ingredient_preserves_order() {
        let catalog = sample_catalog();

        let names: Vec<&str> = catalog
            .find_by_ingredient("herb")
            .into_iter()
            .map(Recipe::name)
            .collect();
        assert_eq!(names, vec!["Heal", "Fire"]);

        let names: Vec<&str> = catalog
            .find_by_ingredient("water")
            .into_iter()
            .map(Recipe::name)
            .collect();
        assert_eq!(names, vec!["Heal"]);

        assert!(catalog.find_by_ingredient("gold").is_empty());
    }

    #[test]
    fn test_repeated_ingredient_matches_once() {
        let mut catalog = RecipeCatalog::new();
        catalog.add_recipe("Double", &strings(&["herb", "herb"]));
        assert_eq!(catalog.find_by_ingredient("herb").len(), 1);
    }

    #[test]
    fn test_ingredient_match_is_exact() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_ingredient("her").is_empty());
        assert!(catalog.find_by_ingredient("Herb").is_empty());
    }

    #[test]
    fn test_empty_ingredient_list_accepted() {
        let mut catalog = RecipeCatalog::new();
        assert!(catalog.add_recipe("Nothing", &[]));
        assert!(catalog.find_by_name("Nothing").unwrap().ingredients().is_empty());
    }

    #[test]
    fn test_list_all_in_registration_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.list_all().iter().map(Recipe::name).collect();
        assert_eq!(names, vec!["Heal", "Fire"]);
        assert!(RecipeCatalog::new().is_empty());
    }
}
