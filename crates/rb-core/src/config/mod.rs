//! Configuration domain models.

pub mod app_config;

pub use app_config::{AppConfig, GatewayConfig, IngredientsConfig, StorageConfig};
