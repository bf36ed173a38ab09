//! Bounded stock counters per potion name.
//!
//! Each registered potion has a counter in `[0, MAX_STOCK]`:
//! - Dispensing takes one, blocked at zero
//! - Returning puts one back, blocked at `MAX_STOCK`
//! - Entries are never removed once created

use crate::{StockLevel, StockRow, WorkshopError};
use std::collections::BTreeMap;

/// Ceiling for every stock counter
pub const MAX_STOCK: u32 = 3;

/// Stock counters keyed by potion name, iterated in name order
#[derive(Clone, Debug, Default)]
pub struct StockLedger {
    counts: BTreeMap<String, u32>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to full stock, overwriting any previous count
    pub fn initialize(&mut self, name: &str) {
        self.counts.insert(name.to_string(), MAX_STOCK);
        tracing::debug!("Initialized stock for '{}' at {}", name, MAX_STOCK);
    }

    /// Take one unit, returning `false` if the name is unknown or out of stock
    pub fn dispense(&mut self, name: &str) -> bool {
        self.try_dispense(name).is_ok()
    }

    /// Take one unit and return the remaining count
    pub fn try_dispense(&mut self, name: &str) -> Result<u32, WorkshopError> {
        let Some(count) = self.counts.get_mut(name) else {
            tracing::warn!("Cannot dispense unknown potion '{}'", name);
            return Err(WorkshopError::UnknownName(name.to_string()));
        };

        if *count == 0 {
            tracing::info!("'{}' is out of stock", name);
            return Err(WorkshopError::OutOfStock(name.to_string()));
        }

        *count -= 1;
        tracing::debug!("Dispensed '{}', {} remaining", name, count);
        Ok(*count)
    }

    /// Put one unit back, returning `false` if the name is unknown or already full
    pub fn return_one(&mut self, name: &str) -> bool {
        self.try_return_one(name).is_ok()
    }

    /// Put one unit back and return the new count
    pub fn try_return_one(&mut self, name: &str) -> Result<u32, WorkshopError> {
        let Some(count) = self.counts.get_mut(name) else {
            tracing::warn!("Cannot return unknown potion '{}'", name);
            return Err(WorkshopError::UnknownName(name.to_string()));
        };

        if *count >= MAX_STOCK {
            tracing::info!("'{}' is already at maximum stock", name);
            return Err(WorkshopError::AtCapacity(name.to_string()));
        }

        *count += 1;
        tracing::debug!("Returned '{}', stock now {}", name, count);
        Ok(*count)
    }

    /// Current count, zero for names without an entry
    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Logical state of an entry, `None` for unknown names
    pub fn level(&self, name: &str) -> Option<StockLevel> {
        self.counts
            .get(name)
            .map(|&count| StockLevel::of(count, MAX_STOCK))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    /// All entries ordered by name
    pub fn snapshot(&self) -> impl Iterator<Item = StockRow<'_>> + '_ {
        self.counts.iter().map(|(name, &count)| StockRow {
            name: name.as_str(),
            count,
        })
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(name: &str) -> StockLedger {
        let mut ledger = StockLedger::new();
        ledger.initialize(name);
        ledger
    }

    #[test]
    fn test_initialize_sets_max() {
        let ledger = ledger_with("Heal");
        assert_eq!(ledger.get("Heal"), MAX_STOCK);
        assert_eq!(ledger.level("Heal"), Some(StockLevel::AtMax));
    }

    #[test]
    fn test_initialize_overwrites() {
        let mut ledger = ledger_with("Heal");
        ledger.dispense("Heal");
        ledger.dispense("Heal");
        assert_eq!(ledger.get("Heal"), 1);

        ledger.initialize("Heal");
        assert_eq!(ledger.get("Heal"), MAX_STOCK);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_dispense_down_to_empty() {
        let mut ledger = ledger_with("Heal");

        assert_eq!(ledger.try_dispense("Heal"), Ok(2));
        assert_eq!(ledger.try_dispense("Heal"), Ok(1));
        assert_eq!(ledger.try_dispense("Heal"), Ok(0));
        assert_eq!(ledger.level("Heal"), Some(StockLevel::Empty));

        for _ in 0..5 {
            assert_eq!(
                ledger.try_dispense("Heal"),
                Err(WorkshopError::OutOfStock("Heal".into()))
            );
            assert_eq!(ledger.get("Heal"), 0);
        }
    }

    #[test]
    fn test_return_blocked_at_capacity() {
        let mut ledger = ledger_with("Heal");

        for _ in 0..5 {
            assert!(!ledger.return_one("Heal"));
            assert_eq!(ledger.get("Heal"), MAX_STOCK);
        }
        assert_eq!(
            ledger.try_return_one("Heal"),
            Err(WorkshopError::AtCapacity("Heal".into()))
        );
    }

    #[test]
    fn test_dispense_then_return_restores_count() {
        for k in 1..=MAX_STOCK {
            let mut ledger = ledger_with("Heal");
            while ledger.get("Heal") > k {
                ledger.dispense("Heal");
            }

            assert!(ledger.dispense("Heal"));
            assert!(ledger.return_one("Heal"));
            assert_eq!(ledger.get("Heal"), k);
        }
    }

    #[test]
    fn test_return_from_empty() {
        let mut ledger = ledger_with("Heal");
        while ledger.dispense("Heal") {}

        assert!(!ledger.dispense("Heal"));
        assert_eq!(ledger.try_return_one("Heal"), Ok(1));
        assert_eq!(ledger.level("Heal"), Some(StockLevel::Partial));
    }

    #[test]
    fn test_counts_stay_in_bounds() {
        let mut ledger = ledger_with("Heal");
        let ops = [true, true, false, true, true, true, true, false, false, false, false, true];

        for dispense in ops {
            if dispense {
                ledger.dispense("Heal");
            } else {
                ledger.return_one("Heal");
            }
            assert!(ledger.get("Heal") <= MAX_STOCK);
        }
    }

    #[test]
    fn test_unknown_name_creates_no_entry() {
        let mut ledger = StockLedger::new();

        assert_eq!(
            ledger.try_dispense("Ghost"),
            Err(WorkshopError::UnknownName("Ghost".into()))
        );
        assert!(!ledger.return_one("Ghost"));
        assert_eq!(ledger.get("Ghost"), 0);
        assert!(ledger.level("Ghost").is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_snapshot_ordered_by_name() {
        let mut ledger = StockLedger::new();
        ledger.initialize("Mana");
        ledger.initialize("Fire");
        ledger.initialize("Heal");
        ledger.dispense("Fire");

        let rows: Vec<(&str, u32)> = ledger.snapshot().map(|r| (r.name, r.count)).collect();
        assert_eq!(rows, vec![("Fire", 2), ("Heal", 3), ("Mana", 3)]);
    }
}
