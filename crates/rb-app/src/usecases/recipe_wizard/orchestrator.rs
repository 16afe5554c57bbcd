//! Recipe wizard orchestrator.
//!
//! This module coordinates the wizard state machine and side effects.

use std::sync::Arc;

use rb_core::ports::{NavigationPort, WizardEventPort};
use rb_core::recipe::Ingredient;
use rb_core::wizard::{
    WizardAction, WizardContractViolation, WizardEvent, WizardState, WizardStateMachine,
};
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::usecases::recipe_wizard::context::WizardContext;
use crate::usecases::SaveRecipe;

/// Errors produced by the wizard orchestrator.
///
/// Validation and persistence failures are not errors here: they are
/// reported through [`WizardState::error`].
#[derive(Debug, thiserror::Error)]
pub enum WizardOrchestratorError {
    #[error("wizard contract violation: {0}")]
    ContractViolation(#[from] WizardContractViolation),
}

/// Orchestrator that drives one wizard session.
pub struct RecipeWizardOrchestrator {
    context: Arc<WizardContext>,
    save_recipe: Arc<SaveRecipe>,
    navigation: Arc<dyn NavigationPort>,
    wizard_events: Arc<dyn WizardEventPort>,
}

impl RecipeWizardOrchestrator {
    pub fn new(
        save_recipe: Arc<SaveRecipe>,
        navigation: Arc<dyn NavigationPort>,
        wizard_events: Arc<dyn WizardEventPort>,
    ) -> Self {
        Self {
            context: WizardContext::default().arc(),
            save_recipe,
            navigation,
            wizard_events,
        }
    }

    pub async fn get_state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn edit_name(&self, name: String) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::EditName { name }).await
    }

    pub async fn edit_description(
        &self,
        description: String,
    ) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::EditDescription { description })
            .await
    }

    pub async fn edit_instructions(
        &self,
        instructions: String,
    ) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::EditInstructions { instructions })
            .await
    }

    pub async fn add_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::AddIngredient { ingredient })
            .await
    }

    pub async fn remove_ingredient(
        &self,
        index: usize,
    ) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::RemoveIngredient { index }).await
    }

    pub async fn next(&self) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::Next).await
    }

    pub async fn back(&self) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::Back).await
    }

    pub async fn complete(&self) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::Complete).await
    }

    pub async fn cancel(&self) -> Result<WizardState, WizardOrchestratorError> {
        self.dispatch(WizardEvent::Cancel).await
    }

    pub async fn dispatch(&self, event: WizardEvent) -> Result<WizardState, WizardOrchestratorError> {
        // Serialize dispatches so a transition, its actions and the state
        // update are never interleaved with another event.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.recipe_wizard.dispatch", event = event.name());
        async {
            let mut current = self.context.get_state().await;
            if let Err(violation) = WizardStateMachine::check(&current, &event) {
                warn!(step = ?current.step, phase = ?current.phase, %violation, "wizard event rejected");
                return Err(WizardOrchestratorError::ContractViolation(violation));
            }

            let mut pending_events = vec![event];
            while let Some(event) = pending_events.pop() {
                let from = current.step;
                let event_name = event.name();
                let (next, actions) = WizardStateMachine::transition(current, event);
                info!(
                    from = ?from,
                    to = ?next.step,
                    phase = ?next.phase,
                    event = event_name,
                    error = ?next.error,
                    "wizard state transition"
                );
                self.set_state_and_emit(next.clone()).await;
                current = next;
                pending_events.extend(self.execute_actions(actions).await);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) -> Vec<WizardEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            match action {
                WizardAction::PersistRecipe { draft } => {
                    debug!(action = "PersistRecipe", "wizard executing action");
                    match self.save_recipe.execute(draft).await {
                        Ok(recipe) => follow_up_events.push(WizardEvent::RecipeSaved { recipe }),
                        Err(err) => {
                            error!(error = %err, "recipe save failed");
                            follow_up_events.push(WizardEvent::RecipeSaveFailed {
                                reason: err.to_string(),
                            });
                        }
                    }
                }
                WizardAction::NotifyCompleted { recipe } => {
                    debug!(action = "NotifyCompleted", recipe_id = %recipe.id, "wizard executing action");
                    self.navigation.on_complete(recipe).await;
                }
                WizardAction::NotifyCancelled => {
                    debug!(action = "NotifyCancelled", "wizard executing action");
                    self.navigation.on_cancel().await;
                }
            }
        }
        follow_up_events
    }

    async fn set_state_and_emit(&self, state: WizardState) {
        self.context.set_state(state.clone()).await;
        self.wizard_events.emit_wizard_state_changed(state).await;
    }
}
