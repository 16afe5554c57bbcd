//! # rb-core
//!
//! Core domain models and business logic for Recipebook.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod ingredient_entry;
pub mod ports;
pub mod recipe;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{IngredientId, RecipeId};
pub use ingredient_entry::{IngredientEntryError, IngredientForm};
pub use recipe::{Ingredient, Quantity, Recipe, RecipeDraft, Unit};
pub use wizard::{WizardError, WizardEvent, WizardState, WizardStateMachine, WizardStep};
