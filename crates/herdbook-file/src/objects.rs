//! Filesystem object storage.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use herdbook_core::error::{Error, InvalidInputError};
use herdbook_core::{ObjectKey, ObjectStore, Result};

use crate::store::map_io;

/// Filesystem-backed object store.
///
/// Content lives under `objects/<key>` beneath the same data root as the
/// document store; URLs are `file://` URLs to the stored content.
#[derive(Debug, Clone)]
pub struct FileObjects {
    root: PathBuf,
}

impl FileObjects {
    /// Create a new object store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn object_path(&self, key: &ObjectKey) -> PathBuf {
        let mut path = self.root.join("objects");
        for segment in key.segments() {
            path.push(segment);
        }
        path
    }

    fn file_url(path: &Path) -> Result<Url> {
        // Canonicalize so relative data roots still yield absolute URLs.
        let absolute = fs::canonicalize(path).map_err(map_io)?;
        Url::from_file_path(&absolute).map_err(|_| {
            Error::InvalidInput(InvalidInputError::Other {
                message: format!("cannot express '{}' as a file URL", absolute.display()),
            })
        })
    }
}

#[async_trait]
impl ObjectStore for FileObjects {
    #[instrument(skip(self, bytes), fields(%key, len = bytes.len()))]
    async fn put(&self, key: &ObjectKey, bytes: &[u8]) -> Result<Url> {
        let path = self.object_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, bytes).map_err(map_io)?;
        fs::rename(&temp_path, &path).map_err(map_io)?;

        debug!("Stored object");

        Self::file_url(&path)
    }

    #[instrument(skip(self), fields(%key))]
    async fn url_for(&self, key: &ObjectKey) -> Result<Url> {
        let path = self.object_path(key);

        if !path.exists() {
            return Err(Error::object_not_found(key));
        }

        Self::file_url(&path)
    }

    #[instrument(skip(self), fields(%key))]
    async fn delete(&self, key: &ObjectKey) -> Result<()> {
        let path = self.object_path(key);

        if !path.exists() {
            return Err(Error::object_not_found(key));
        }

        fs::remove_file(&path).map_err(map_io)?;

        debug!("Deleted object");

        Ok(())
    }
}
