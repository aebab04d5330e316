//! Object store trait.

use async_trait::async_trait;
use url::Url;

use crate::types::ObjectKey;
use crate::Result;

/// A content-addressed object store for uploaded images and other blobs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store content under a key, returning a retrievable URL.
    ///
    /// Overwrites any existing content at the key.
    async fn put(&self, key: &ObjectKey, bytes: &[u8]) -> Result<Url>;

    /// Get the retrievable URL for a key.
    async fn url_for(&self, key: &ObjectKey) -> Result<Url>;

    /// Delete the content at a key.
    ///
    /// An absent key fails with
    /// [`Error::ObjectNotFound`](crate::Error::ObjectNotFound), which
    /// best-effort cleanup paths swallow; any other failure is real.
    async fn delete(&self, key: &ObjectKey) -> Result<()>;
}
