//! Document store trait.

use async_trait::async_trait;

use crate::store::{Document, DocumentPage, FieldMap, FindQuery};
use crate::types::{Collection, DocId};
use crate::Result;

/// A document store.
///
/// The store is the sole owner of persistent state. It serializes
/// individual document writes but offers no cross-document locking or
/// transactions; multi-document invariants are maintained by call-order
/// discipline in the layers above.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run a find query against a collection.
    ///
    /// A stale cursor in the query (one whose document has been deleted)
    /// fails with [`Error::InvalidCursor`](crate::Error::InvalidCursor).
    async fn find(&self, collection: &Collection, query: &FindQuery) -> Result<DocumentPage>;

    /// Get a single document by id.
    ///
    /// A missing document is an error, never empty data.
    async fn get(&self, collection: &Collection, id: &DocId) -> Result<Document>;

    /// Create a document with a store-assigned id and creation timestamp.
    async fn create(&self, collection: &Collection, fields: &FieldMap) -> Result<DocId>;

    /// Merge fields into a document, creating it if absent.
    ///
    /// Existing fields not named in `fields` are left untouched.
    async fn set(&self, collection: &Collection, id: &DocId, fields: &FieldMap) -> Result<()>;

    /// Delete a document.
    ///
    /// Deleting an absent document succeeds, which keeps cascading
    /// deletes safely re-invocable.
    async fn delete(&self, collection: &Collection, id: &DocId) -> Result<()>;
}
