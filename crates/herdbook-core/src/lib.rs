//! herdbook-core - Core types and traits for the livestock registry.
//!
//! This crate defines the document-store model (documents, filters, cursors)
//! and the trait seams for the external collaborators: the document store,
//! the object store, and the user directory. Concrete implementations live
//! in sibling crates and are injected into the registry layer.

pub mod error;
pub mod store;
pub mod traits;
pub mod types;

pub use error::Error;
pub use store::{Direction, Document, DocumentPage, FieldMap, Filter, FindQuery, OrderBy};
pub use traits::{DocumentStore, ObjectStore, UserDirectory, UserProfile};
pub use types::{Collection, DocId, ObjectKey, PageCursor};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
