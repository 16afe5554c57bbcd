use serde::{Deserialize, Serialize};

use crate::ids::RecipeId;
use crate::recipe::{Ingredient, RecipeDraft};

/// Persisted recipe entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    pub created_at_ms: i64,
}

impl Recipe {
    /// The only way a draft becomes a recipe. Text fields are trimmed.
    pub fn assemble(id: RecipeId, draft: RecipeDraft, created_at_ms: i64) -> Self {
        let (name, description, ingredients, instructions) = draft.into_parts();
        Self {
            id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            ingredients,
            instructions: instructions.trim().to_string(),
            created_at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Quantity, Unit};

    #[test]
    fn assemble_copies_draft_fields() {
        let mut draft = RecipeDraft::new();
        draft.set_name("  Tarta ");
        draft.set_description("De manzana");
        draft.set_instructions("Mezclar y hornear\n");
        draft.push_ingredient(
            Ingredient::new("Harina", Quantity::new(2.0).unwrap(), Unit::from_input("Kg")).unwrap(),
        );

        let recipe = Recipe::assemble(RecipeId::from("r-1"), draft, 1_700_000_000_000);

        assert_eq!(recipe.id.as_str(), "r-1");
        assert_eq!(recipe.name, "Tarta");
        assert_eq!(recipe.description, "De manzana");
        assert_eq!(recipe.instructions, "Mezclar y hornear");
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.created_at_ms, 1_700_000_000_000);
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let recipe = Recipe::assemble(RecipeId::from("r-1"), RecipeDraft::new(), 5);
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["createdAtMs"], 5);
        assert!(json.get("created_at_ms").is_none());
    }
}
