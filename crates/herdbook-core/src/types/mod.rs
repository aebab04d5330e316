//! Core identifier and handle types.

mod collection;
mod cursor;
mod doc_id;
mod object_key;

pub use collection::Collection;
pub use cursor::PageCursor;
pub use doc_id::DocId;
pub use object_key::ObjectKey;
