//! Configuration file support for the alchemy workshop.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/alchemy/config.toml`.

use crate::{Error, Recipe, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Recipes registered when the workshop opens
    #[serde(default)]
    pub seed: Vec<Recipe>,
}

/// Interactive session configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Inputs that end ingredient entry
    #[serde(default = "default_terminators")]
    pub terminators: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_terminators() -> Vec<String> {
    vec!["끝".into(), "end".into()]
}

fn default_log_level() -> String {
    "warn".into()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("alchemy").join("config.toml"))
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check the configuration for problems
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.session.terminators.is_empty() {
            errors.push("session.terminators must not be empty".to_string());
        }
        if self.session.terminators.iter().any(|t| t.trim().is_empty()) {
            errors.push("session.terminators contains a blank entry".to_string());
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }

        let mut seen = HashSet::new();
        for seed in &self.seed {
            if seed.name().trim().is_empty() {
                errors.push("Seed recipe has empty name".to_string());
                continue;
            }
            if seed.ingredients().is_empty() {
                errors.push(format!("Seed recipe '{}' has no ingredients", seed.name()));
            }
            if !seen.insert(seed.name()) {
                errors.push(format!("Seed recipe '{}' is declared twice", seed.name()));
            }
        }

        errors
    }
}
