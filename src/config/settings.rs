//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "PAYROLL_BIND_ADDR";
/// Environment variable holding the rate configuration directory.
pub const CONFIG_DIR_VAR: &str = "PAYROLL_CONFIG_DIR";
/// Environment variable holding the log filter.
pub const LOG_LEVEL_VAR: &str = "RUST_LOG";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CONFIG_DIR: &str = "./config/el_salvador";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for the payroll HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address the server listens on.
    pub bind_addr: SocketAddr,
    /// Directory holding `statutory.yaml` and `rent_tax.yaml`.
    pub config_dir: PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl ServerSettings {
    /// Reads settings from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|e| EngineError::InvalidSettings {
                name: BIND_ADDR_VAR.to_string(),
                message: format!("'{}' is not a socket address: {}", bind_addr_raw, e),
            })?;

        let config_dir = lookup(CONFIG_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

        let log_level = lookup(LOG_LEVEL_VAR)
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            bind_addr,
            config_dir,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = ServerSettings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(settings.config_dir, PathBuf::from("./config/el_salvador"));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_values_read_from_lookup() {
        let settings = ServerSettings::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (CONFIG_DIR_VAR, "/etc/payroll"),
            (LOG_LEVEL_VAR, "payroll_engine=debug"),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr.port(), 8080);
        assert_eq!(settings.config_dir, PathBuf::from("/etc/payroll"));
        assert_eq!(settings.log_level, "payroll_engine=debug");
    }

    #[test]
    fn test_blank_config_dir_uses_default() {
        let settings = ServerSettings::from_lookup(lookup_from(&[(CONFIG_DIR_VAR, "  ")])).unwrap();
        assert_eq!(settings.config_dir, PathBuf::from("./config/el_salvador"));
    }

    #[test]
    fn test_invalid_bind_addr_returns_error() {
        let result = ServerSettings::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")]));

        match result {
            Err(EngineError::InvalidSettings { name, message }) => {
                assert_eq!(name, BIND_ADDR_VAR);
                assert!(message.contains("localhost"));
            }
            other => panic!("Expected InvalidSettings, got {:?}", other),
        }
    }
}
