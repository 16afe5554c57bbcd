//! Wizard state machine.
//!
//! Pure transition function for the recipe wizard. Side effects are returned
//! as [`WizardAction`]s and executed by the application layer, which feeds the
//! outcome back in as [`WizardEvent::RecipeSaved`] or
//! [`WizardEvent::RecipeSaveFailed`].

use crate::recipe::RecipeDraft;
use crate::wizard::validation::{validate_draft, validate_step};
use crate::wizard::{
    WizardAction, WizardContractViolation, WizardError, WizardEvent, WizardPhase, WizardState,
    WizardStep,
};

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    /// Reject events the transition graph never produces for `state`.
    pub fn check(state: &WizardState, event: &WizardEvent) -> Result<(), WizardContractViolation> {
        if state.is_closed() {
            return Err(WizardContractViolation::SessionClosed);
        }
        let saving = state.phase == WizardPhase::Saving;
        match event {
            WizardEvent::RecipeSaved { .. } | WizardEvent::RecipeSaveFailed { .. } if !saving => {
                Err(WizardContractViolation::UnexpectedSaveResult)
            }
            WizardEvent::RecipeSaved { .. } | WizardEvent::RecipeSaveFailed { .. } => Ok(()),
            _ if saving => Err(WizardContractViolation::SaveInProgress),
            WizardEvent::Complete if state.step != WizardStep::Instructions => Err(
                WizardContractViolation::CompleteBeforeLastStep(state.step),
            ),
            _ => Ok(()),
        }
    }

    pub fn transition(
        mut state: WizardState,
        event: WizardEvent,
    ) -> (WizardState, Vec<WizardAction>) {
        if let Err(_violation) = Self::check(&state, &event) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                step = ?state.step,
                phase = ?state.phase,
                event = event.name(),
                violation = %_violation,
                "invalid wizard transition"
            );
            return (state, Vec::new());
        }

        match event {
            WizardEvent::EditName { name } => {
                state.draft.set_name(name);
                state.error = None;
                (state, Vec::new())
            }
            WizardEvent::EditDescription { description } => {
                state.draft.set_description(description);
                state.error = None;
                (state, Vec::new())
            }
            WizardEvent::EditInstructions { instructions } => {
                state.draft.set_instructions(instructions);
                state.error = None;
                (state, Vec::new())
            }
            WizardEvent::AddIngredient { ingredient } => {
                state.draft.push_ingredient(ingredient);
                state.error = None;
                (state, Vec::new())
            }
            WizardEvent::RemoveIngredient { index } => {
                // Out-of-range indexes leave the state untouched.
                if state.draft.remove_ingredient(index).is_some() {
                    state.error = None;
                }
                (state, Vec::new())
            }
            WizardEvent::Next => match state.step.next() {
                // Next on the last step is the same transition as Complete.
                None => Self::complete(state),
                Some(next) => match validate_step(state.step, &state.draft) {
                    Ok(()) => {
                        state.step = next;
                        state.error = None;
                        (state, Vec::new())
                    }
                    Err(error) => {
                        state.error = Some(error);
                        (state, Vec::new())
                    }
                },
            },
            WizardEvent::Back => {
                if let Some(previous) = state.step.previous() {
                    state.step = previous;
                    state.error = None;
                }
                (state, Vec::new())
            }
            WizardEvent::Complete => Self::complete(state),
            WizardEvent::Cancel => {
                state.draft = RecipeDraft::new();
                state.error = None;
                state.phase = WizardPhase::Cancelled;
                (state, vec![WizardAction::NotifyCancelled])
            }
            WizardEvent::RecipeSaved { recipe } => {
                state.draft = RecipeDraft::new();
                state.error = None;
                state.phase = WizardPhase::Completed {
                    recipe_id: recipe.id.clone(),
                };
                (state, vec![WizardAction::NotifyCompleted { recipe }])
            }
            WizardEvent::RecipeSaveFailed { reason } => {
                state.phase = WizardPhase::Editing;
                state.error = Some(WizardError::Persistence { reason });
                (state, Vec::new())
            }
        }
    }

    fn complete(mut state: WizardState) -> (WizardState, Vec<WizardAction>) {
        match validate_draft(&state.draft) {
            Ok(()) => {
                state.error = None;
                state.phase = WizardPhase::Saving;
                let draft = state.draft.clone();
                (state, vec![WizardAction::PersistRecipe { draft }])
            }
            Err(error) => {
                state.error = Some(error);
                (state, Vec::new())
            }
        }
    }
}
