//! Configuration resolution for the binary.
//!
//! Reads the TOML file when one exists, then applies command-line overrides.
//! No validation happens here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rb_core::config::AppConfig;
use rb_infra::fs::documents_dir;
use rb_infra::load_config;
use tracing::{debug, info};

/// Load `config_path` if given and present, otherwise use defaults.
///
/// An explicitly passed path that does not exist is an error; the default
/// location is optional.
pub fn resolve_config(
    config_path: Option<&Path>,
    data_dir_override: Option<PathBuf>,
) -> anyhow::Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => {
            let config = load_config(path)?;
            info!(path = %path.display(), "configuration loaded");
            config
        }
        None => match default_config_path() {
            Some(path) if path.exists() => {
                let config = load_config(&path)?;
                info!(path = %path.display(), "configuration loaded");
                config
            }
            _ => {
                debug!("no configuration file, using defaults");
                AppConfig::default()
            }
        },
    };

    if let Some(data_dir) = data_dir_override {
        config.storage.data_dir = data_dir;
    }
    if config.storage.data_dir.as_os_str().is_empty() {
        config.storage.data_dir =
            documents_dir().context("Failed to resolve default document store directory")?;
    }

    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    rb_infra::fs::app_data_dir()
        .ok()
        .map(|dir| dir.join("recipebook.toml"))
}
