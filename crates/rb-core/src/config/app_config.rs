//! Application configuration domain model

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::recipe::Unit;

/// Application configuration. Every field has a default so partial files load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document store call limits
    pub gateway: GatewayConfig,

    /// Ingredient entry defaults
    pub ingredients: IngredientsConfig,

    /// Storage settings
    pub storage: StorageConfig,
}

/// Timeouts applied to every document store call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub save_timeout_ms: u64,
    pub query_timeout_ms: u64,
}

/// Ingredient entry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientsConfig {
    /// Save confirmed ingredients to the ingredient collection with a fresh id
    pub catalogue_new: bool,
    pub default_quantity: f64,
    pub default_unit: String,
}

/// Storage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory of the JSON document store; empty means the platform data dir
    pub data_dir: PathBuf,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            save_timeout_ms: 10_000,
            query_timeout_ms: 5_000,
        }
    }
}

impl GatewayConfig {
    pub fn save_timeout(&self) -> Duration {
        Duration::from_millis(self.save_timeout_ms)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for IngredientsConfig {
    fn default() -> Self {
        Self {
            catalogue_new: false,
            default_quantity: 1.0,
            default_unit: Unit::Count.as_str().to_string(),
        }
    }
}

impl IngredientsConfig {
    pub fn default_unit(&self) -> Unit {
        Unit::from_input(&self.default_unit)
    }
}

impl AppConfig {
    /// Map a parsed TOML document onto the configuration, keeping defaults
    /// for anything missing.
    pub fn from_toml(value: &toml::Value) -> anyhow::Result<Self> {
        let config = value.clone().try_into::<AppConfig>()?;
        Ok(config)
    }
}
