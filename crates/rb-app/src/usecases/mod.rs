//! Business logic use cases
//!
//! RecipeWizardOrchestrator      → step navigation, validation, completion
//!         ↓ PersistRecipe
//! SaveRecipe                    → one document write
//!
//! IngredientEntryFlow           → one ingredient, name autocomplete
//!         ↓ catalogue_new
//! CatalogueIngredient           → ingredient collection write

pub mod catalogue_ingredient;
pub mod ingredient_entry;
pub mod internal;
pub mod recipe_wizard;
pub mod save_recipe;
pub mod session;

pub use catalogue_ingredient::CatalogueIngredient;
pub use ingredient_entry::{ConfirmOutcome, IngredientEntryFlow, IngredientEntryFlowError};
pub use internal::GatewayError;
pub use recipe_wizard::{RecipeWizardOrchestrator, WizardOrchestratorError};
pub use save_recipe::SaveRecipe;
pub use session::{AddIngredientOutcome, WizardSession, WizardSessionError};
