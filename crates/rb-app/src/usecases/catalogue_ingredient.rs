use std::sync::Arc;
use std::time::Duration;

use rb_core::ids::IngredientId;
use rb_core::ports::document_store::to_document;
use rb_core::ports::DocumentStorePort;
use rb_core::recipe::{Ingredient, INGREDIENTS_COLLECTION};
use tracing::debug;

use crate::usecases::internal::gateway::{call_with_timeout, GatewayError};

/// Use case for adding a confirmed ingredient to the ingredient collection,
/// so later name lookups can suggest it.
pub struct CatalogueIngredient {
    store: Arc<dyn DocumentStorePort>,
    timeout: Duration,
}

impl CatalogueIngredient {
    pub fn new(store: Arc<dyn DocumentStorePort>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn execute(&self, ingredient: Ingredient) -> Result<Ingredient, GatewayError> {
        let id = IngredientId::from(self.store.generate_id(INGREDIENTS_COLLECTION));
        let ingredient = ingredient.with_id(id.clone());
        let fields = to_document(&ingredient)?;
        call_with_timeout(
            "ingredient save",
            self.timeout,
            self.store.save(INGREDIENTS_COLLECTION, id.as_str(), fields),
        )
        .await?;
        debug!(ingredient_id = %id, name = ingredient.name(), "ingredient catalogued");
        Ok(ingredient)
    }
}
