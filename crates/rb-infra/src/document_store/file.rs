//! JSON file document store.
//!
//! Each collection is one `{collection}.json` file under the base directory,
//! holding an object keyed by document id. Saves rewrite the whole file
//! through a temp file and rename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use rb_core::ports::{DocumentFields, DocumentStoreError, DocumentStorePort};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::document_store::matching_names;

type Collection = BTreeMap<String, DocumentFields>;

pub struct FileDocumentStore {
    base_dir: PathBuf,
    /// Serializes read-modify-write cycles on collection files.
    write_lock: Mutex<()>,
}

impl FileDocumentStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.base_dir.join(format!("{collection}.json"))
    }

    async fn load(&self, collection: &str) -> Result<Collection> {
        let path = self.collection_path(collection);
        if !fs::try_exists(&path)
            .await
            .with_context(|| format!("stat collection failed: {}", path.display()))?
        {
            return Ok(Collection::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("read collection failed: {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Collection::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse collection failed: {}", path.display()))
    }

    async fn atomic_write(&self, collection: &str, documents: &Collection) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .with_context(|| format!("create store dir failed: {}", self.base_dir.display()))?;

        let path = self.collection_path(collection);
        let content = serde_json::to_string_pretty(documents)
            .with_context(|| format!("serialize collection failed: {collection}"))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp collection failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &path).await.with_context(|| {
            format!(
                "rename temp collection to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

fn backend(err: anyhow::Error) -> DocumentStoreError {
    error!(error = %format!("{err:#}"), "document store failure");
    DocumentStoreError::Backend(format!("{err:#}"))
}

#[async_trait]
impl DocumentStorePort for FileDocumentStore {
    fn generate_id(&self, _collection: &str) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    async fn save(
        &self,
        collection: &str,
        id: &str,
        fields: DocumentFields,
    ) -> Result<(), DocumentStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut documents = self.load(collection).await.map_err(backend)?;
        documents.insert(id.to_string(), fields);
        self.atomic_write(collection, &documents)
            .await
            .map_err(backend)?;

        debug!(collection, id, total = documents.len(), "document saved to file");
        Ok(())
    }

    async fn query_by_name_contains(
        &self,
        collection: &str,
        partial: &str,
    ) -> Result<Vec<String>, DocumentStoreError> {
        let documents = self.load(collection).await.map_err(backend)?;
        Ok(matching_names(documents.values(), partial))
    }
}
