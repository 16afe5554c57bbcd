use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Document id of a persisted recipe, issued by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl_id!(RecipeId);
