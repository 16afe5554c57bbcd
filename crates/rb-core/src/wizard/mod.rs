//! Recipe creation wizard domain module.
//!
//! Three ordered steps (general info, ingredients, instructions) over one
//! in-memory [`RecipeDraft`](crate::recipe::RecipeDraft).

mod action;
mod error;
mod event;
mod state;
pub mod state_machine;
mod step;
pub mod validation;

pub use action::WizardAction;
pub use error::{WizardContractViolation, WizardError};
pub use event::WizardEvent;
pub use state::{WizardPhase, WizardState};
pub use state_machine::WizardStateMachine;
pub use step::WizardStep;
pub use validation::{validate_draft, validate_step};
