//! In-memory document store.
//!
//! Reference [`DocumentStore`] implementation backing tests and local play.
//! Every collection keeps its documents plus lazily-created watch senders;
//! each mutation publishes a fresh snapshot to subscribers. Writes are
//! last-write-wins: concurrent updates to the same document interleave with
//! no coordination, exactly like the hosted store.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{RwLock, watch};

use super::{
    DocumentStore,
    document::{Document, DocumentId, apply_patch},
    errors::{StoreError, StoreResult},
    watch::{CollectionWatch, DocumentWatch},
};

#[derive(Default)]
struct Collection {
    docs: HashMap<DocumentId, Value>,
    watcher: Option<watch::Sender<Vec<Document>>>,
    doc_watchers: HashMap<DocumentId, watch::Sender<Option<Document>>>,
}

impl Collection {
    fn snapshot(&self) -> Vec<Document> {
        self.docs
            .iter()
            .map(|(id, data)| Document {
                id: *id,
                data: data.clone(),
            })
            .collect()
    }

    fn document(&self, id: DocumentId) -> Option<Document> {
        self.docs.get(&id).map(|data| Document {
            id,
            data: data.clone(),
        })
    }

    /// Push the current state to collection and document subscribers.
    fn publish(&self, id: DocumentId) {
        if let Some(tx) = &self.watcher {
            tx.send_replace(self.snapshot());
        }
        if let Some(tx) = self.doc_watchers.get(&id) {
            tx.send_replace(self.document(id));
        }
    }
}

/// In-memory [`DocumentStore`]
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create(&self, collection: &str, data: Value) -> StoreResult<DocumentId> {
        let mut collections = self.collections.write().await;
        let entry = collections.entry(collection.to_string()).or_default();
        let id = DocumentId::new_v4();
        entry.docs.insert(id, data);
        entry.publish(id);
        Ok(id)
    }

    async fn get(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|entry| entry.document(id)))
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(Collection::snapshot)
            .unwrap_or_default())
    }

    async fn update(&self, collection: &str, id: DocumentId, patch: Value) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let entry = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id,
            })?;
        let data = entry.docs.get_mut(&id).ok_or_else(|| StoreError::NotFound {
            collection: collection.to_string(),
            id,
        })?;
        apply_patch(data, &patch)?;
        entry.publish(id);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: DocumentId) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(entry) = collections.get_mut(collection)
            && entry.docs.remove(&id).is_some()
        {
            entry.publish(id);
        }
        Ok(())
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(entry) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(entry
            .docs
            .iter()
            .filter(|(_, data)| data.get(field) == Some(value))
            .map(|(id, data)| Document {
                id: *id,
                data: data.clone(),
            })
            .collect())
    }

    async fn watch_collection(&self, collection: &str) -> StoreResult<CollectionWatch> {
        let mut collections = self.collections.write().await;
        let entry = collections.entry(collection.to_string()).or_default();
        let snapshot = entry.snapshot();
        let tx = entry
            .watcher
            .get_or_insert_with(|| watch::channel(snapshot).0);
        Ok(CollectionWatch { rx: tx.subscribe() })
    }

    async fn watch_document(&self, collection: &str, id: DocumentId) -> StoreResult<DocumentWatch> {
        let mut collections = self.collections.write().await;
        let entry = collections.entry(collection.to_string()).or_default();
        let current = entry.document(id);
        let tx = entry
            .doc_watchers
            .entry(id)
            .or_insert_with(|| watch::channel(current).0);
        Ok(DocumentWatch { rx: tx.subscribe() })
    }
}
