//! # Cart Configuration
//!
//! Optional limits handed to a `ShoppingCart` when it is built.
//!
//! ## Configuration Sources
//! 1. Explicit value (`ShoppingCart::with_config`)
//! 2. Environment variables (`CartConfig::from_env`)
//! 3. Defaults: no limits beyond the store's stock
//!
//! The cart never reads the environment on its own.

use serde::{Deserialize, Serialize};
use std::env;

const MAX_LINE_QUANTITY_VAR: &str = "STOCKCART_MAX_LINE_QUANTITY";
const MAX_LINES_VAR: &str = "STOCKCART_MAX_LINES";

/// Limits enforced by `add_item` on top of the stock check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartConfig {
    /// Largest quantity a single product line may reach.
    pub max_line_quantity: Option<i64>,

    /// Largest number of distinct products in the cart.
    pub max_lines: Option<usize>,
}

impl CartConfig {
    /// Loads configuration from environment variables.
    ///
    /// - `STOCKCART_MAX_LINE_QUANTITY` - positive integer
    /// - `STOCKCART_MAX_LINES` - positive integer
    ///
    /// Unset or empty variables leave the limit off.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// ## Example
    /// ```rust
    /// use stockcart_core::CartConfig;
    ///
    /// let config = CartConfig::from_lookup(|key| match key {
    ///     "STOCKCART_MAX_LINES" => Some("20".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.max_lines, Some(20));
    /// assert_eq!(config.max_line_quantity, None);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(CartConfig {
            max_line_quantity: parse_limit(&lookup, MAX_LINE_QUANTITY_VAR)?,
            max_lines: parse_limit(&lookup, MAX_LINES_VAR)?,
        })
    }
}

fn parse_limit<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(key).filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))?;

    if value <= T::default() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }

    Ok(Some(value))
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
