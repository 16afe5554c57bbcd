//! Ingredient entry sub-flow domain module.

mod error;
pub mod form;

pub use error::IngredientEntryError;
pub use form::{IngredientForm, NameQuery};
