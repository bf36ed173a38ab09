#![forbid(unsafe_code)]

//! Core domain model for the alchemy workshop.
//!
//! This crate provides:
//! - Domain types (recipes, stock levels)
//! - The recipe catalog and the bounded stock ledger
//! - The `Workshop` façade combining both
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod stock;
pub mod workshop;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result, WorkshopError};
pub use types::*;
pub use catalog::RecipeCatalog;
pub use stock::{StockLedger, MAX_STOCK};
pub use workshop::Workshop;
pub use config::Config;
