use serde::{Deserialize, Serialize};

use crate::wizard::WizardStep;

/// User-visible wizard errors, carried in the state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardError {
    #[error("name cannot be empty")]
    NameEmpty,
    #[error("add at least one ingredient")]
    IngredientsEmpty,
    #[error("instructions cannot be empty")]
    InstructionsEmpty,
    #[error("could not save recipe: {reason}")]
    Persistence { reason: String },
}

/// Events that the transition graph never produces from a well-behaved screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardContractViolation {
    #[error("wizard session already closed")]
    SessionClosed,
    #[error("complete requested from {0:?}, only allowed on the last step")]
    CompleteBeforeLastStep(WizardStep),
    #[error("save already in progress")]
    SaveInProgress,
    #[error("save result delivered while no save was pending")]
    UnexpectedSaveResult,
}
