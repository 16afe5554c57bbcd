use serde::{Deserialize, Serialize};

use crate::recipe::Ingredient;

/// In-progress recipe owned by one wizard session.
///
/// The ingredient list only supports append and remove.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    name: String,
    description: String,
    ingredients: Vec<Ingredient>,
    instructions: String,
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = instructions.into();
    }

    pub fn push_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Remove the ingredient at `index`, returning it when the index was valid.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<Ingredient> {
        (index < self.ingredients.len()).then(|| self.ingredients.remove(index))
    }

    pub(crate) fn into_parts(self) -> (String, String, Vec<Ingredient>, String) {
        (self.name, self.description, self.ingredients, self.instructions)
    }
}
