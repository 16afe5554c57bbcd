use crate::recipe::{Recipe, RecipeDraft};

/// Side-effects produced by wizard transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    /// Assemble the draft into a recipe and write it once.
    PersistRecipe { draft: RecipeDraft },
    /// Hand the saved recipe to the navigation layer.
    NotifyCompleted { recipe: Recipe },
    /// Tell the navigation layer the wizard was abandoned.
    NotifyCancelled,
}
