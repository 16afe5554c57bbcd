//! Ingredient entry use cases.

pub mod flow;

pub use flow::{ConfirmOutcome, IngredientEntryFlow, IngredientEntryFlowError};
