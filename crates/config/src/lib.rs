//! Bookshelf Configuration System
//!
//! Holds the settings a catalog is created with, most importantly the genre
//! vocabulary and its age-restricted subset. New settings are added as
//! config sections implementing the `ConfigSection` trait.
//!
//! - **Graceful degradation**: invalid configs load with warnings; `load_or_default` never fails
//! - **Atomic writes**: config files are never left half-written
//! - **Environment overrides**: `BOOKSHELF_SECTION_FIELD` variables win over the file
//!
//! # Example
//!
//! ```rust,no_run
//! use bookshelf_config::ConfigManager;
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config = manager.load_or_default();
//! let vocabulary = config.catalog.to_vocabulary().expect("Invalid genres");
//! println!("{} genres configured", vocabulary.len());
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
pub mod app_config;
mod catalog_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::{
    ConfigManager, ENV_APP_LOG_LEVEL, ENV_CATALOG_AGE_RESTRICTED_GENRES, ENV_CATALOG_GENRES,
};
pub use validation::{ConfigSection, Validator};

// Re-export config sections
pub use app_config::{AppConfig, LogLevel};
pub use catalog_config::CatalogConfig;

use serde::{Deserialize, Serialize};

/// Newest config file format this build reads; files with a higher
/// `version` are refused
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Genre vocabulary for the catalog
    pub catalog: CatalogConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.catalog.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}
