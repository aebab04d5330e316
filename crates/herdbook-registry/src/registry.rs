//! The registry handle.

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;

use herdbook_core::{DocumentPage, DocumentStore, FieldMap, Filter, FindQuery, ObjectStore, Result};

/// Collection names used by the registry.
pub(crate) mod collections {
    use herdbook_core::Collection;

    pub(crate) fn agents() -> Collection {
        Collection::new("agents")
    }

    /// Individuals and enterprises share this collection, distinguished by
    /// the `farmerType` field.
    pub(crate) fn farmers() -> Collection {
        Collection::new("farmers")
    }

    pub(crate) fn cattle() -> Collection {
        Collection::new("cattle")
    }

    pub(crate) fn assignments() -> Collection {
        Collection::new("assignments")
    }

    pub(crate) fn scan_requests() -> Collection {
        Collection::new("scan_requests")
    }

    pub(crate) fn unassigned_cattle() -> Collection {
        Collection::new("unassigned_cattle")
    }

    pub(crate) fn custom_stats() -> Collection {
        Collection::new("custom_stats")
    }
}

/// The registry: every dashboard operation against the stores goes through
/// this handle.
///
/// Store handles are injected at construction, never reached through
/// globals, so tests and alternate deployments can swap implementations.
/// Cloning is cheap and clones share the underlying stores.
pub struct Registry<S, O> {
    pub(crate) store: Arc<S>,
    pub(crate) objects: Arc<O>,
}

impl<S, O> Clone for Registry<S, O> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            objects: Arc::clone(&self.objects),
        }
    }
}

impl<S, O> Registry<S, O>
where
    S: DocumentStore,
    O: ObjectStore,
{
    /// Create a registry over the given stores.
    pub fn new(store: S, objects: O) -> Self {
        Self {
            store: Arc::new(store),
            objects: Arc::new(objects),
        }
    }

    /// Access the underlying document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Access the underlying object store.
    pub fn objects(&self) -> &O {
        &self.objects
    }

    /// Fetch all documents matching the filters, in store-default order.
    pub(crate) async fn find_all(
        &self,
        collection: &herdbook_core::Collection,
        filters: Vec<Filter>,
    ) -> Result<DocumentPage> {
        let mut query = FindQuery::new();
        for filter in filters {
            query = query.filter(filter);
        }
        self.store.find(collection, &query).await
    }

    /// Count documents matching the filters.
    pub(crate) async fn count(
        &self,
        collection: &herdbook_core::Collection,
        filters: Vec<Filter>,
    ) -> Result<usize> {
        Ok(self.find_all(collection, filters).await?.documents.len())
    }
}

/// Decode every document in a page into a typed value.
pub(crate) fn decode_all<T: DeserializeOwned>(page: DocumentPage) -> Result<Vec<T>> {
    page.documents.iter().map(|doc| doc.decode()).collect()
}

/// Stamp a mutation with the client-side update time.
pub(crate) fn touched(fields: FieldMap) -> FieldMap {
    fields.with("updatedAt", Utc::now().to_rfc3339())
}
