//! Document store port
//!
//! The remote document database seen as an opaque key/value store addressed
//! by collection name and document id. Implementations live in the
//! infrastructure layer.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::errors::DocumentStoreError;

/// Field mapping of one stored document.
pub type DocumentFields = serde_json::Map<String, serde_json::Value>;

#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Issue a fresh document id for `collection`. Does not write anything.
    fn generate_id(&self, collection: &str) -> String;

    /// Write (create or overwrite) one whole document.
    async fn save(
        &self,
        collection: &str,
        id: &str,
        fields: DocumentFields,
    ) -> Result<(), DocumentStoreError>;

    /// Names of documents whose `name` field contains `partial`, ignoring case.
    async fn query_by_name_contains(
        &self,
        collection: &str,
        partial: &str,
    ) -> Result<Vec<String>, DocumentStoreError>;
}

/// Encode a value as document fields. Only values serializing to a JSON
/// object are accepted.
pub fn to_document<T: Serialize>(value: &T) -> Result<DocumentFields, DocumentStoreError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(DocumentStoreError::Serialization(format!(
            "expected an object, got {other}"
        ))),
        Err(err) => Err(DocumentStoreError::Serialization(err.to_string())),
    }
}

pub fn from_document<T: DeserializeOwned>(fields: DocumentFields) -> Result<T, DocumentStoreError> {
    serde_json::from_value(serde_json::Value::Object(fields))
        .map_err(|err| DocumentStoreError::Serialization(err.to_string()))
}

/// Case-insensitive `contains` used by store adapters for name lookups.
pub fn name_matches(fields: &DocumentFields, partial: &str) -> Option<String> {
    let name = fields.get("name")?.as_str()?;
    name.to_lowercase()
        .contains(&partial.to_lowercase())
        .then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::RecipeId;
    use crate::recipe::{Ingredient, Quantity, Recipe, RecipeDraft, Unit};

    #[test]
    fn recipe_document_round_trips() {
        let mut draft = RecipeDraft::new();
        draft.set_name("Tarta");
        draft.set_instructions("Hornear");
        draft.push_ingredient(
            Ingredient::new("Harina", Quantity::new(2.0).unwrap(), Unit::Kilogram).unwrap(),
        );
        let recipe = Recipe::assemble(RecipeId::from("r-1"), draft, 42);

        let fields = to_document(&recipe).unwrap();
        assert_eq!(fields["name"], "Tarta");
        assert_eq!(fields["ingredients"][0]["unit"], "kilogram");

        let decoded: Recipe = from_document(fields).unwrap();
        assert_eq!(decoded, recipe);
    }

    #[test]
    fn non_object_values_are_rejected() {
        let err = to_document(&"just a string").unwrap_err();
        assert!(matches!(err, DocumentStoreError::Serialization(_)));
    }

    #[test]
    fn name_matching_ignores_case() {
        let fields = to_document(&serde_json::json!({ "name": "Harina Integral" })).unwrap();
        assert_eq!(name_matches(&fields, "INTEG"), Some("Harina Integral".into()));
        assert_eq!(name_matches(&fields, "azucar"), None);

        let nameless = to_document(&serde_json::json!({ "title": "x" })).unwrap();
        assert_eq!(name_matches(&nameless, "x"), None);
    }
}
