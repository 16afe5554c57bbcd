use serde::{Deserialize, Serialize};

use crate::ids::RecipeId;
use crate::recipe::RecipeDraft;
use crate::wizard::{WizardError, WizardStep};

/// Session lifecycle of a wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum WizardPhase {
    /// Accepting edits and navigation.
    Editing,
    /// The assembled recipe is being written.
    Saving,
    /// Recipe persisted, caller notified.
    Completed { recipe_id: RecipeId },
    /// Draft discarded, caller notified.
    Cancelled,
}

/// Snapshot of a wizard session, returned from every dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: RecipeDraft,
    pub error: Option<WizardError>,
    pub phase: WizardPhase,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::GeneralInfo,
            draft: RecipeDraft::new(),
            error: None,
            phase: WizardPhase::Editing,
        }
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn is_closed(&self) -> bool {
        matches!(
            self.phase,
            WizardPhase::Completed { .. } | WizardPhase::Cancelled
        )
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
