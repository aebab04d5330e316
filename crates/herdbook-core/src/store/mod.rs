//! Document-store model types.
//!
//! This module defines the types exchanged with a
//! [`DocumentStore`](crate::DocumentStore): documents, field maps, filters,
//! and queries. The model is schema-agnostic; interpretation of fields is
//! left to higher layers.

mod document;
mod query;

pub use document::{CREATED_AT, Document, FieldMap};
pub use query::{Direction, DocumentPage, Filter, FindQuery, OrderBy};
