//! Document store boundary.
//!
//! This module abstracts the hosted document database behind a small async
//! trait: collection/document CRUD with partial patches, a simple equality
//! filter, and live subscriptions. Core logic depends only on snapshot reads,
//! async writes, and change notifications, never on a concrete backend.
//!
//! Collections are addressed by `/`-separated string paths; sub-collections
//! nest under a document id (`"lobbies/{id}/players"`). Writes are
//! last-write-wins with no versioning or compare-and-set, matching the
//! hosted store's semantics.
//!
//! ## Example
//!
//! ```
//! use rogue_goose::store::{DocumentStore, MemoryStore};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryStore::new();
//!     let id = store.create("lobbies", json!({"name": "Foo"})).await?;
//!     store.update("lobbies", id, json!({"status": "waiting"})).await?;
//!     let doc = store.get("lobbies", id).await?;
//!     assert!(doc.is_some());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;

pub mod document;
pub mod errors;
pub mod memory;
pub mod watch;

pub use document::{Document, DocumentId, FromDocument};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use watch::{CollectionWatch, DocumentWatch, TypedCollectionWatch, TypedDocumentWatch};

/// Async document store with live subscriptions
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document with a store-assigned id
    async fn create(&self, collection: &str, data: Value) -> StoreResult<DocumentId>;

    /// Read a single document
    async fn get(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>>;

    /// Read all documents in a collection
    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Apply a partial patch to a document
    ///
    /// The patch must be a JSON object; top-level keys may be dotted field
    /// paths setting nested fields. Fails with [`StoreError::NotFound`] if the
    /// document does not exist.
    async fn update(&self, collection: &str, id: DocumentId, patch: Value) -> StoreResult<()>;

    /// Delete a document (idempotent)
    async fn delete(&self, collection: &str, id: DocumentId) -> StoreResult<()>;

    /// Documents whose top-level `field` equals `value`
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Document>>;

    /// Subscribe to a collection's live contents
    async fn watch_collection(&self, collection: &str) -> StoreResult<CollectionWatch>;

    /// Subscribe to a single document's live state
    async fn watch_document(&self, collection: &str, id: DocumentId) -> StoreResult<DocumentWatch>;
}
