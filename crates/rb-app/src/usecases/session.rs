//! One recipe-creation screen session: the wizard plus its ingredient entry
//! sub-flow, built from [`AppDeps`].

use std::sync::Arc;

use rb_core::ports::NavigationPort;
use rb_core::wizard::WizardState;
use rb_core::IngredientForm;
use tracing::info;

use crate::deps::AppDeps;
use crate::usecases::{
    CatalogueIngredient, ConfirmOutcome, IngredientEntryFlow, IngredientEntryFlowError,
    RecipeWizardOrchestrator, SaveRecipe, WizardOrchestratorError,
};

#[derive(Debug, thiserror::Error)]
pub enum WizardSessionError {
    #[error(transparent)]
    Wizard(#[from] WizardOrchestratorError),
    #[error(transparent)]
    IngredientEntry(#[from] IngredientEntryFlowError),
}

/// Result of [`WizardSession::add_ingredient`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddIngredientOutcome {
    /// Ingredient appended; the wizard state after the append.
    Added(WizardState),
    /// Entry form rejected the input and stays open.
    Rejected(IngredientForm),
}

pub struct WizardSession {
    wizard: RecipeWizardOrchestrator,
    ingredient_entry: IngredientEntryFlow,
}

impl WizardSession {
    pub fn new(deps: &AppDeps, navigation: Arc<dyn NavigationPort>) -> Self {
        let gateway = &deps.config.gateway;
        let save_recipe = Arc::new(SaveRecipe::new(
            deps.document_store.clone(),
            deps.clock.clone(),
            gateway.save_timeout(),
        ));
        let catalogue = deps.config.ingredients.catalogue_new.then(|| {
            Arc::new(CatalogueIngredient::new(
                deps.document_store.clone(),
                gateway.save_timeout(),
            ))
        });
        info!(
            catalogue_new = deps.config.ingredients.catalogue_new,
            "wizard session started"
        );

        Self {
            wizard: RecipeWizardOrchestrator::new(
                save_recipe,
                navigation,
                deps.wizard_events.clone(),
            ),
            ingredient_entry: IngredientEntryFlow::new(
                deps.document_store.clone(),
                catalogue,
                deps.wizard_events.clone(),
                deps.config.ingredients.clone(),
                gateway.query_timeout(),
            ),
        }
    }

    pub fn wizard(&self) -> &RecipeWizardOrchestrator {
        &self.wizard
    }

    pub fn ingredient_entry(&self) -> &IngredientEntryFlow {
        &self.ingredient_entry
    }

    /// Confirm the open ingredient form and append the result to the draft.
    pub async fn add_ingredient(&self) -> Result<AddIngredientOutcome, WizardSessionError> {
        match self.ingredient_entry.confirm().await? {
            ConfirmOutcome::Confirmed(ingredient) => {
                let state = self.wizard.add_ingredient(ingredient).await?;
                Ok(AddIngredientOutcome::Added(state))
            }
            ConfirmOutcome::Rejected(form) => Ok(AddIngredientOutcome::Rejected(form)),
        }
    }
}
