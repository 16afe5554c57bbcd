//! # Application Dependencies
//!
//! This module defines the dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use rb_core::config::AppConfig;
use rb_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no optional fields.
pub struct AppDeps {
    // Persistence
    pub document_store: Arc<dyn DocumentStorePort>,
    pub clock: Arc<dyn ClockPort>,

    // UI observer
    pub wizard_events: Arc<dyn WizardEventPort>,

    pub config: AppConfig,
}
