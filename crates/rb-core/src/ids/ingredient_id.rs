use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Document id of a catalogued ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl_id!(IngredientId);
