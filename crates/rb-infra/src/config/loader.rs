//! TOML configuration file loading.

use std::path::Path;

use anyhow::{Context, Result};
use rb_core::config::AppConfig;

/// Read and parse an `AppConfig` from a TOML file.
///
/// Missing sections and keys fall back to their defaults. A missing file is
/// an error here; callers decide whether to fall back to `AppConfig::default()`.
pub fn load_config(config_path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;

    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_partial_config_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[gateway]
save_timeout_ms = 2500

[ingredients]
catalogue_new = true
default_unit = "gram"
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.gateway.save_timeout(), Duration::from_millis(2500));
        assert_eq!(config.gateway.query_timeout(), Duration::from_millis(5000));
        assert!(config.ingredients.catalogue_new);
        assert_eq!(config.ingredients.default_quantity, 1.0);
        assert_eq!(config.ingredients.default_unit, "gram");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Path::new("/nonexistent/recipebook.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[gateway").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
