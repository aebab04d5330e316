//! Filesystem document storage.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use herdbook_core::error::{Error, InvalidInputError, TransportError};
use herdbook_core::store::CREATED_AT;
use herdbook_core::{
    Collection, Direction, DocId, Document, DocumentPage, DocumentStore, FieldMap, FindQuery,
    OrderBy, PageCursor, Result,
};

pub(crate) fn map_io(err: std::io::Error) -> Error {
    Error::Transport(TransportError::Io {
        message: err.to_string(),
    })
}

fn map_json(err: serde_json::Error) -> Error {
    Error::InvalidInput(InvalidInputError::Decode {
        message: err.to_string(),
    })
}

/// On-disk form of a document: the store-assigned creation timestamp plus
/// the caller-owned fields.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDocument {
    created_at: DateTime<Utc>,
    fields: FieldMap,
}

/// Filesystem-backed document store.
///
/// Documents live under `collections/<collection>/<id>.json`. Mutations are
/// serialized under an advisory lock and written atomically (temp file +
/// rename). Creation timestamps are strictly monotonic per store handle, so
/// a later create always sorts after an earlier one even within one clock
/// tick.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    last_created: Arc<Mutex<i64>>,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            last_created: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collections_dir(&self) -> PathBuf {
        self.root.join("collections")
    }

    fn collection_dir(&self, collection: &Collection) -> PathBuf {
        self.collections_dir().join(collection.as_str())
    }

    fn document_path(&self, collection: &Collection, id: &DocId) -> PathBuf {
        self.collection_dir(collection)
            .join(format!("{}.json", id))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join("store.lock")
    }

    /// Take the store-wide mutation lock.
    fn lock_store(&self) -> Result<File> {
        let lock_path = self.lock_path();

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io)?;

        FileExt::lock_exclusive(&lock_file).map_err(map_io)?;

        Ok(lock_file)
    }

    /// Next creation timestamp, strictly greater than any previously
    /// assigned by this handle.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let mut last = self.last_created.lock().unwrap();
        let mut micros = Utc::now().timestamp_micros();
        if micros <= *last {
            micros = *last + 1;
        }
        *last = micros;
        DateTime::from_timestamp_micros(micros).unwrap_or_else(Utc::now)
    }

    fn load_stored(&self, collection: &Collection, id: &DocId) -> Result<Option<StoredDocument>> {
        let path = self.document_path(collection, id);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(map_io)?;
        let stored = serde_json::from_str(&content).map_err(map_json)?;
        Ok(Some(stored))
    }

    fn load_document(&self, collection: &Collection, id: &DocId) -> Result<Option<Document>> {
        Ok(self.load_stored(collection, id)?.map(|stored| Document {
            id: id.clone(),
            created_at: stored.created_at,
            fields: stored.fields,
        }))
    }

    fn write_document(
        &self,
        collection: &Collection,
        id: &DocId,
        stored: &StoredDocument,
    ) -> Result<()> {
        let path = self.document_path(collection, id);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let content = serde_json::to_string_pretty(stored).map_err(map_json)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io)?;
        fs::rename(&temp_path, &path).map_err(map_io)?;

        Ok(())
    }

    /// Load every document in a collection, skipping files that are not
    /// well-formed documents.
    fn load_collection(&self, collection: &Collection) -> Result<Vec<Document>> {
        let dir = self.collection_dir(collection);

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in fs::read_dir(&dir).map_err(map_io)? {
            let entry = entry.map_err(map_io)?;
            let path = entry.path();

            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let Ok(id) = DocId::new(stem) else {
                continue;
            };

            if let Ok(Some(document)) = self.load_document(collection, &id) {
                documents.push(document);
            }
        }

        Ok(documents)
    }

    /// Resolve a cursor to the sort key of the document it names.
    fn resolve_cursor(
        &self,
        collection: &Collection,
        cursor: &PageCursor,
    ) -> Result<(DateTime<Utc>, String)> {
        let id = DocId::new(cursor.as_str())
            .map_err(|_| Error::invalid_cursor(cursor, "malformed cursor"))?;

        let document = self
            .load_document(collection, &id)?
            .ok_or_else(|| Error::invalid_cursor(cursor, "document no longer exists"))?;

        Ok((document.created_at, document.id.to_string()))
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    #[instrument(skip(self, query), fields(%collection))]
    async fn find(&self, collection: &Collection, query: &FindQuery) -> Result<DocumentPage> {
        let order = query
            .order
            .clone()
            .unwrap_or_else(|| OrderBy::asc(CREATED_AT));

        // Ordering is only defined over the creation timestamp; ties are
        // broken by id so pagination over the order is total.
        if order.field != CREATED_AT {
            return Err(InvalidInputError::Query {
                message: format!("unsupported order field '{}'", order.field),
            }
            .into());
        }

        let mut documents: Vec<Document> = self
            .load_collection(collection)?
            .into_iter()
            .filter(|doc| query.filters.iter().all(|f| f.matches(&doc.fields)))
            .collect();

        documents.sort_by(|a, b| {
            let key_a = (a.created_at, a.id.as_str());
            let key_b = (b.created_at, b.id.as_str());
            match order.direction {
                Direction::Ascending => key_a.cmp(&key_b),
                Direction::Descending => key_b.cmp(&key_a),
            }
        });

        if let Some(cursor) = &query.cursor {
            let (anchor_ts, anchor_id) = self.resolve_cursor(collection, cursor)?;
            documents.retain(|doc| {
                let key = (doc.created_at, doc.id.as_str());
                let anchor = (anchor_ts, anchor_id.as_str());
                match order.direction {
                    Direction::Ascending => key > anchor,
                    Direction::Descending => key < anchor,
                }
            });
        }

        if let Some(limit) = query.limit {
            documents.truncate(limit as usize);
        }

        let last = documents
            .last()
            .map(|doc| PageCursor::new(doc.id.as_str()));

        debug!(count = documents.len(), "Found documents");

        Ok(DocumentPage { documents, last })
    }

    #[instrument(skip(self), fields(%collection, %id))]
    async fn get(&self, collection: &Collection, id: &DocId) -> Result<Document> {
        self.load_document(collection, id)?
            .ok_or_else(|| Error::not_found(collection, id))
    }

    #[instrument(skip(self, fields), fields(%collection))]
    async fn create(&self, collection: &Collection, fields: &FieldMap) -> Result<DocId> {
        let id = DocId::new(Uuid::new_v4().simple().to_string())?;
        let created_at = self.next_timestamp();

        let lock = self.lock_store()?;
        self.write_document(
            collection,
            &id,
            &StoredDocument {
                created_at,
                fields: fields.clone(),
            },
        )?;
        FileExt::unlock(&lock).map_err(map_io)?;

        debug!(%id, "Created document");

        Ok(id)
    }

    #[instrument(skip(self, fields), fields(%collection, %id))]
    async fn set(&self, collection: &Collection, id: &DocId, fields: &FieldMap) -> Result<()> {
        let lock = self.lock_store()?;

        let stored = match self.load_stored(collection, id)? {
            Some(mut stored) => {
                stored.fields.merge_from(fields);
                stored
            }
            // Merge-upsert: an absent document is created with the given
            // fields and a fresh creation timestamp.
            None => StoredDocument {
                created_at: self.next_timestamp(),
                fields: fields.clone(),
            },
        };

        self.write_document(collection, id, &stored)?;
        FileExt::unlock(&lock).map_err(map_io)?;

        debug!("Merged document fields");

        Ok(())
    }

    #[instrument(skip(self), fields(%collection, %id))]
    async fn delete(&self, collection: &Collection, id: &DocId) -> Result<()> {
        let lock = self.lock_store()?;

        let path = self.document_path(collection, id);
        if path.exists() {
            fs::remove_file(&path).map_err(map_io)?;
            debug!("Deleted document");
        }

        FileExt::unlock(&lock).map_err(map_io)?;

        Ok(())
    }
}
