//! In-memory document store, used for tests and ephemeral sessions.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use rb_core::ports::{DocumentFields, DocumentStoreError, DocumentStorePort};
use tokio::sync::RwLock;
use tracing::debug;

use crate::document_store::matching_names;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, DocumentFields>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, collection: &str, id: &str) -> Option<DocumentFields> {
        self.collections
            .read()
            .await
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned()
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStorePort for InMemoryDocumentStore {
    fn generate_id(&self, _collection: &str) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    async fn save(
        &self,
        collection: &str,
        id: &str,
        fields: DocumentFields,
    ) -> Result<(), DocumentStoreError> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        debug!(collection, id, "document saved in memory");
        Ok(())
    }

    async fn query_by_name_contains(
        &self,
        collection: &str,
        partial: &str,
    ) -> Result<Vec<String>, DocumentStoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|documents| matching_names(documents.values(), partial))
            .unwrap_or_default())
    }
}
