//! Error types for the alchemy_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for alchemy_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A workshop operation was rejected
    #[error(transparent)]
    Workshop(#[from] WorkshopError),
}

/// Why a catalog or stock operation was rejected.
///
/// None of these are fatal; the operation that produced one made no change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkshopError {
    /// A recipe with this name is already registered
    #[error("a recipe named '{0}' already exists")]
    DuplicateName(String),

    /// No stock entry exists for this name
    #[error("no potion named '{0}' exists")]
    UnknownName(String),

    /// Dispense attempted at zero stock
    #[error("'{0}' is out of stock")]
    OutOfStock(String),

    /// Return attempted at maximum stock
    #[error("'{0}' is already at maximum stock")]
    AtCapacity(String),
}

impl WorkshopError {
    /// The recipe name the failure refers to
    pub fn name(&self) -> &str {
        match self {
            WorkshopError::DuplicateName(name)
            | WorkshopError::UnknownName(name)
            | WorkshopError::OutOfStock(name)
            | WorkshopError::AtCapacity(name) => name,
        }
    }
}
