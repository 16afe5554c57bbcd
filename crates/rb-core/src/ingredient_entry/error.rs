use serde::{Deserialize, Serialize};

/// Errors shown inline on the ingredient entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IngredientEntryError {
    #[error("name cannot be empty")]
    NameEmpty,
    #[error("quantity must be a valid non-negative number")]
    InvalidQuantity,
    #[error("could not catalogue ingredient: {reason}")]
    Persistence { reason: String },
}
