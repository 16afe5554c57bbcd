use std::sync::Arc;
use std::time::Duration;

use rb_core::ids::RecipeId;
use rb_core::ports::document_store::to_document;
use rb_core::ports::{ClockPort, DocumentStorePort};
use rb_core::recipe::{Recipe, RecipeDraft, RECIPES_COLLECTION};
use tracing::{debug, info_span, Instrument};

use crate::usecases::internal::gateway::{call_with_timeout, GatewayError};

/// Use case for persisting a finished draft as a new recipe.
///
/// Generates the document id, assembles the recipe and writes it in a
/// single `save` call.
pub struct SaveRecipe {
    store: Arc<dyn DocumentStorePort>,
    clock: Arc<dyn ClockPort>,
    timeout: Duration,
}

impl SaveRecipe {
    pub fn new(store: Arc<dyn DocumentStorePort>, clock: Arc<dyn ClockPort>, timeout: Duration) -> Self {
        Self {
            store,
            clock,
            timeout,
        }
    }

    pub async fn execute(&self, draft: RecipeDraft) -> Result<Recipe, GatewayError> {
        let id = RecipeId::from(self.store.generate_id(RECIPES_COLLECTION));
        let span = info_span!("usecase.save_recipe.execute", recipe_id = %id);
        async {
            let recipe = Recipe::assemble(id, draft, self.clock.now_ms());
            let fields = to_document(&recipe)?;
            call_with_timeout(
                "recipe save",
                self.timeout,
                self.store
                    .save(RECIPES_COLLECTION, recipe.id.as_str(), fields),
            )
            .await?;
            debug!(ingredients = recipe.ingredients.len(), "recipe saved");
            Ok(recipe)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rb_core::ports::{DocumentFields, DocumentStoreError};
    use rb_core::recipe::{Ingredient, Quantity, Unit};

    mockall::mock! {
        pub Store {}

        #[async_trait]
        impl DocumentStorePort for Store {
            fn generate_id(&self, collection: &str) -> String;
            async fn save(
                &self,
                collection: &str,
                id: &str,
                fields: DocumentFields,
            ) -> Result<(), DocumentStoreError>;
            async fn query_by_name_contains(
                &self,
                collection: &str,
                partial: &str,
            ) -> Result<Vec<String>, DocumentStoreError>;
        }
    }

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    fn draft() -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.set_name("Tarta");
        draft.set_instructions("Mezclar y hornear");
        draft.push_ingredient(
            Ingredient::new("Harina", Quantity::new(2.0).unwrap(), Unit::from_input("Kg")).unwrap(),
        );
        draft
    }

    #[tokio::test]
    async fn save_recipe_writes_one_document_with_generated_id() {
        let mut store = MockStore::new();
        store
            .expect_generate_id()
            .withf(|collection| collection == RECIPES_COLLECTION)
            .times(1)
            .returning(|_| "recipe-42".to_string());
        store
            .expect_save()
            .withf(|collection, id, fields| {
                collection == RECIPES_COLLECTION
                    && id == "recipe-42"
                    && fields["id"] == "recipe-42"
                    && fields["name"] == "Tarta"
                    && fields["createdAtMs"] == 1_000
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = SaveRecipe::new(Arc::new(store), Arc::new(FixedClock(1_000)), Duration::from_secs(1));
        let recipe = use_case.execute(draft()).await.unwrap();

        assert_eq!(recipe.id.as_str(), "recipe-42");
        assert_eq!(recipe.instructions, "Mezclar y hornear");
    }

    #[tokio::test]
    async fn save_recipe_surfaces_backend_failure() {
        let mut store = MockStore::new();
        store.expect_generate_id().returning(|_| "recipe-1".to_string());
        store
            .expect_save()
            .times(1)
            .returning(|_, _, _| Err(DocumentStoreError::Unavailable("offline".into())));

        let use_case = SaveRecipe::new(Arc::new(store), Arc::new(FixedClock(0)), Duration::from_secs(1));
        let err = use_case.execute(draft()).await.unwrap_err();

        assert_eq!(
            err,
            GatewayError::Store(DocumentStoreError::Unavailable("offline".into()))
        );
    }
}
