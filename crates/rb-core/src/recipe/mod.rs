//! Recipe domain model.

mod draft;
mod ingredient;
#[allow(clippy::module_inception)]
mod recipe;
mod unit;

pub use draft::RecipeDraft;
pub use ingredient::{Ingredient, Quantity};
pub use recipe::Recipe;
pub use unit::Unit;

/// Collection holding persisted recipes.
pub const RECIPES_COLLECTION: &str = "recipes";

/// Collection holding catalogued ingredients, used for name suggestions.
pub const INGREDIENTS_COLLECTION: &str = "ingredients";
