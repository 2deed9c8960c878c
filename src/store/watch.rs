//! Live subscription handles backed by tokio watch channels.
//!
//! A watch carries the latest full snapshot; `snapshot` reads it without
//! waiting and `changed` waits for the next push from the store. Typed
//! wrappers decode snapshots through [`FromDocument`].

use std::marker::PhantomData;

use tokio::sync::watch;

use super::{
    document::{Document, FromDocument},
    errors::{StoreError, StoreResult},
};

/// Live view of a collection's contents, order-irrelevant.
pub struct CollectionWatch {
    pub(crate) rx: watch::Receiver<Vec<Document>>,
}

impl CollectionWatch {
    /// Current snapshot of the collection
    pub fn snapshot(&self) -> Vec<Document> {
        self.rx.borrow().clone()
    }

    /// Wait until the store pushes a new snapshot
    pub async fn changed(&mut self) -> StoreResult<()> {
        self.rx
            .changed()
            .await
            .map_err(|_| StoreError::SubscriptionClosed)
    }

    /// Decode snapshots into `T`
    pub fn typed<T: FromDocument>(self) -> TypedCollectionWatch<T> {
        TypedCollectionWatch {
            inner: self,
            _marker: PhantomData,
        }
    }
}

/// [`CollectionWatch`] decoding documents into a model type
pub struct TypedCollectionWatch<T> {
    inner: CollectionWatch,
    _marker: PhantomData<T>,
}

impl<T: FromDocument> TypedCollectionWatch<T> {
    /// Current decoded snapshot of the collection
    pub fn snapshot(&self) -> StoreResult<Vec<T>> {
        self.inner
            .rx
            .borrow()
            .iter()
            .map(|doc| T::from_document(doc).map_err(StoreError::from))
            .collect()
    }

    /// Wait until the store pushes a new snapshot
    pub async fn changed(&mut self) -> StoreResult<()> {
        self.inner.changed().await
    }
}

/// Live view of a single document. `None` once the document is deleted.
pub struct DocumentWatch {
    pub(crate) rx: watch::Receiver<Option<Document>>,
}

impl DocumentWatch {
    /// Current snapshot of the document
    pub fn snapshot(&self) -> Option<Document> {
        self.rx.borrow().clone()
    }

    /// Wait until the store pushes a new snapshot
    pub async fn changed(&mut self) -> StoreResult<()> {
        self.rx
            .changed()
            .await
            .map_err(|_| StoreError::SubscriptionClosed)
    }

    /// Decode snapshots into `T`
    pub fn typed<T: FromDocument>(self) -> TypedDocumentWatch<T> {
        TypedDocumentWatch {
            inner: self,
            _marker: PhantomData,
        }
    }
}

/// [`DocumentWatch`] decoding the document into a model type
pub struct TypedDocumentWatch<T> {
    inner: DocumentWatch,
    _marker: PhantomData<T>,
}

impl<T: FromDocument> TypedDocumentWatch<T> {
    /// Current decoded snapshot of the document
    pub fn snapshot(&self) -> StoreResult<Option<T>> {
        self.inner
            .rx
            .borrow()
            .as_ref()
            .map(|doc| T::from_document(doc))
            .transpose()
            .map_err(StoreError::from)
    }

    /// Wait until the store pushes a new snapshot
    pub async fn changed(&mut self) -> StoreResult<()> {
        self.inner.changed().await
    }
}
