//! Store configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

const RECEIPT_PREFIX_VAR: &str = "STOCKCART_RECEIPT_PREFIX";
const DEFAULT_RECEIPT_PREFIX: &str = "ORD";

/// In-memory store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Leading segment of receipt numbers, e.g. `ORD` in `ORD-20260131-0001`.
    pub receipt_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            receipt_prefix: DEFAULT_RECEIPT_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// An unset or blank `STOCKCART_RECEIPT_PREFIX` keeps the default prefix.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let receipt_prefix = match lookup(RECEIPT_PREFIX_VAR).filter(|raw| !raw.trim().is_empty()) {
            None => DEFAULT_RECEIPT_PREFIX.to_string(),
            Some(raw) => {
                let prefix = raw.trim();
                if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Err(ConfigError::InvalidValue(RECEIPT_PREFIX_VAR.to_string()));
                }
                prefix.to_string()
            }
        };

        Ok(StoreConfig { receipt_prefix })
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
