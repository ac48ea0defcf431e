//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate sets from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, RentTaxTable, StatutoryConfig, StatutoryMetadata, StatutoryRates};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them into a [`PayrollConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/el_salvador/
/// ├── statutory.yaml   # Metadata, contribution rates, ISSS cap
/// └── rent_tax.yaml    # Renta withholding brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/el_salvador").unwrap();
/// println!("AFP employee rate: {}", loader.rates().afp_employee);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/el_salvador")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The rates or bracket table fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory = Self::load_yaml::<StatutoryConfig>(&path.join("statutory.yaml"))?;
        let rent_tax = Self::load_yaml::<RentTaxTable>(&path.join("rent_tax.yaml"))?;

        let config = PayrollConfig::new(statutory, rent_tax)?;
        debug!(
            path = %path.display(),
            version = %config.metadata().version,
            brackets = config.rent_tax().brackets.len(),
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, e.g. a test-only rate table.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the rate set metadata.
    pub fn metadata(&self) -> &StatutoryMetadata {
        self.config.metadata()
    }

    /// Returns the contribution rates.
    pub fn rates(&self) -> &StatutoryRates {
        self.config.rates()
    }

    /// Returns the ISSS monthly salary ceiling.
    pub fn isss_monthly_cap(&self) -> Decimal {
        self.config.isss_monthly_cap()
    }

    /// Returns the Renta withholding table.
    pub fn rent_tax_table(&self) -> &RentTaxTable {
        self.config.rent_tax()
    }
}
