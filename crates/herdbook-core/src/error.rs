//! Error types for the herdbook crates.
//!
//! This module provides a unified error type with explicit variants so
//! callers can distinguish the cases they are expected to handle differently:
//! missing documents, stale pagination cursors, and missing stored objects.

use thiserror::Error;

use crate::types::{Collection, DocId, ObjectKey, PageCursor};

/// The unified error type for herdbook operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested document does not exist.
    ///
    /// Surfaced as a distinct failure, never as empty data.
    #[error("no document '{id}' in collection '{collection}'")]
    NotFound { collection: String, id: String },

    /// A pagination cursor no longer resolves to a stored document.
    ///
    /// Callers should restart pagination from the beginning rather than
    /// treat this as unrecoverable.
    #[error("invalid cursor '{cursor}': {reason}")]
    InvalidCursor { cursor: String, reason: String },

    /// An object-store key has no stored content.
    ///
    /// Distinct from other storage failures so best-effort cleanup can
    /// swallow it while still propagating real faults.
    #[error("no stored object at '{key}'")]
    ObjectNotFound { key: String },

    /// Network or storage transport errors.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Input validation errors (invalid ids, keys, query parameters).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Create a not-found error for a document.
    pub fn not_found(collection: &Collection, id: &DocId) -> Self {
        Error::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an invalid-cursor error.
    pub fn invalid_cursor(cursor: &PageCursor, reason: impl Into<String>) -> Self {
        Error::InvalidCursor {
            cursor: cursor.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an object-not-found error.
    pub fn object_not_found(key: &ObjectKey) -> Self {
        Error::ObjectNotFound {
            key: key.to_string(),
        }
    }

    /// Check whether this error is a document or object not-found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::ObjectNotFound { .. })
    }

    /// Check whether this error is a stale pagination cursor.
    pub fn is_invalid_cursor(&self) -> bool {
        matches!(self, Error::InvalidCursor { .. })
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// HTTP error response from a remote service.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Local storage I/O error.
    #[error("I/O error: {message}")]
    Io { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid document id format.
    #[error("invalid document id '{value}': {reason}")]
    DocId { value: String, reason: String },

    /// Invalid object key format.
    #[error("invalid object key '{value}': {reason}")]
    ObjectKey { value: String, reason: String },

    /// Invalid query parameter.
    #[error("invalid query: {message}")]
    Query { message: String },

    /// A stored document could not be decoded into the expected shape.
    #[error("malformed document: {message}")]
    Decode { message: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
