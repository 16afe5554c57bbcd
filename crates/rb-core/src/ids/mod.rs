//! ID type wrappers for type safety.

mod id_macro;
pub mod ingredient_id;
pub mod recipe_id;

pub use ingredient_id::IngredientId;
pub use recipe_id::RecipeId;
