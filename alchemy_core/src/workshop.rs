//! The workshop façade.
//!
//! Combines the recipe catalog with the stock ledger. Registering a recipe
//! touches both stores (catalog first, stock only if the catalog accepted);
//! every other operation goes to exactly one of them.

use crate::{Recipe, RecipeCatalog, StockLedger, StockLevel, StockRow, WorkshopError};

/// A single workshop: its recipes and their stock
#[derive(Clone, Debug, Default)]
pub struct Workshop {
    catalog: RecipeCatalog,
    stock: StockLedger,
}

impl Workshop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workshop with the given recipes already registered
    ///
    /// Recipes whose name is already taken are skipped with a warning.
    pub fn from_seeds(seeds: &[Recipe]) -> Self {
        let mut workshop = Self::new();
        for seed in seeds {
            if let Err(e) = workshop.try_register_recipe(seed.name(), seed.ingredients()) {
                tracing::warn!("Skipping seed recipe: {}", e);
            }
        }
        tracing::debug!("Seeded workshop with {} recipe(s)", workshop.catalog.len());
        workshop
    }

    /// Register a recipe and stock it, returning `false` on a duplicate name
    pub fn register_recipe(&mut self, name: &str, ingredients: &[String]) -> bool {
        self.try_register_recipe(name, ingredients).is_ok()
    }

    pub fn try_register_recipe(
        &mut self,
        name: &str,
        ingredients: &[String],
    ) -> Result<(), WorkshopError> {
        self.catalog.try_add_recipe(name, ingredients)?;
        self.stock.initialize(name);
        Ok(())
    }

    pub fn dispense(&mut self, name: &str) -> bool {
        self.stock.dispense(name)
    }

    /// Dispense one potion; no catalog check is made
    pub fn try_dispense(&mut self, name: &str) -> Result<u32, WorkshopError> {
        self.stock.try_dispense(name)
    }

    pub fn return_one(&mut self, name: &str) -> bool {
        self.stock.return_one(name)
    }

    /// Return one potion; no catalog check is made
    pub fn try_return_one(&mut self, name: &str) -> Result<u32, WorkshopError> {
        self.stock.try_return_one(name)
    }

    pub fn search_by_name(&self, name: &str) -> Option<&Recipe> {
        self.catalog.find_by_name(name)
    }

    pub fn search_by_ingredient(&self, ingredient: &str) -> Vec<&Recipe> {
        self.catalog.find_by_ingredient(ingredient)
    }

    pub fn list_recipes(&self) -> &[Recipe] {
        self.catalog.list_all()
    }

    pub fn stock_snapshot(&self) -> impl Iterator<Item = StockRow<'_>> + '_ {
        self.stock.snapshot()
    }

    pub fn stock(&self, name: &str) -> u32 {
        self.stock.get(name)
    }

    pub fn stock_level(&self, name: &str) -> Option<StockLevel> {
        self.stock.level(name)
    }
}
