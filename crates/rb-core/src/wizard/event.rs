use serde::{Deserialize, Serialize};

use crate::recipe::{Ingredient, Recipe};

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    EditName { name: String },
    EditDescription { description: String },
    EditInstructions { instructions: String },
    AddIngredient { ingredient: Ingredient },
    RemoveIngredient { index: usize },
    Next,
    Back,
    Complete,
    Cancel,
    /// Save finished (orchestrator).
    RecipeSaved { recipe: Recipe },
    /// Save failed or timed out (orchestrator).
    RecipeSaveFailed { reason: String },
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::EditName { .. } => "edit_name",
            WizardEvent::EditDescription { .. } => "edit_description",
            WizardEvent::EditInstructions { .. } => "edit_instructions",
            WizardEvent::AddIngredient { .. } => "add_ingredient",
            WizardEvent::RemoveIngredient { .. } => "remove_ingredient",
            WizardEvent::Next => "next",
            WizardEvent::Back => "back",
            WizardEvent::Complete => "complete",
            WizardEvent::Cancel => "cancel",
            WizardEvent::RecipeSaved { .. } => "recipe_saved",
            WizardEvent::RecipeSaveFailed { .. } => "recipe_save_failed",
        }
    }
}
