//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load statutory rate sets from YAML
//! files (contribution rates, the ISSS salary cap, and the Renta bracket
//! table) and to read server settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/el_salvador").unwrap();
//! println!("Loaded rates version: {}", config.metadata().version);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{BIND_ADDR_VAR, CONFIG_DIR_VAR, LOG_LEVEL_VAR, ServerSettings};
pub use types::{
    IsssConfig, PayrollConfig, RentTaxTable, StatutoryConfig, StatutoryMetadata, StatutoryRates,
    TaxBracket,
};

#[cfg(test)]
pub(crate) use types::tests::test_config;
