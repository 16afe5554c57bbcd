//! Recipe wizard use cases.
//!
//! This module exposes the wizard orchestrator.

mod context;
pub mod orchestrator;

pub use context::WizardContext;
pub use orchestrator::{RecipeWizardOrchestrator, WizardOrchestratorError};
