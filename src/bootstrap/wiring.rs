//! # Dependency Injection
//!
//! The only place that depends on `rb-infra` and `rb-app` together. It
//! assembles adapters behind their ports and makes no decisions.

use std::sync::Arc;

use rb_app::AppDeps;
use rb_core::config::AppConfig;
use rb_core::ports::WizardEventPort;
use rb_infra::{FileDocumentStore, SystemClock};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Document store initialization failed: {0}")]
    DocumentStoreInit(String),
}

/// Build [`AppDeps`] backed by the JSON file document store.
pub fn wire_dependencies(
    config: AppConfig,
    wizard_events: Arc<dyn WizardEventPort>,
) -> WiringResult<AppDeps> {
    let data_dir = config.storage.data_dir.clone();
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        WiringError::DocumentStoreInit(format!(
            "failed to create {}: {e}",
            data_dir.display()
        ))
    })?;
    info!(data_dir = %data_dir.display(), "document store ready");

    Ok(AppDeps {
        document_store: Arc::new(FileDocumentStore::new(data_dir)),
        clock: Arc::new(SystemClock),
        wizard_events,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::TerminalScreen;
    use tempfile::TempDir;

    #[test]
    fn creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.storage.data_dir = dir.path().join("nested").join("documents");

        let deps = wire_dependencies(config, Arc::new(TerminalScreen::new(Vec::new()))).unwrap();
        assert!(deps.config.storage.data_dir.is_dir());
    }

    #[test]
    fn unusable_data_dir_is_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = AppConfig::default();
        config.storage.data_dir = file.path().join("documents");

        let err = wire_dependencies(config, Arc::new(TerminalScreen::new(Vec::new())))
            .err()
            .unwrap();
        assert!(matches!(err, WiringError::DocumentStoreInit(_)));
    }
}
