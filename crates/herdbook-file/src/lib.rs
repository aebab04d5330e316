//! herdbook-file - Filesystem-backed store implementations.
//!
//! [`FileStore`] implements the document-store contract and [`FileObjects`]
//! the object-store contract over a local data directory. Both are used by
//! the CLI and as the injectable store in registry tests.

mod objects;
mod store;

pub use objects::FileObjects;
pub use store::FileStore;
