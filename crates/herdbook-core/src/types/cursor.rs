//! Pagination cursor type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque pagination continuation token.
///
/// A cursor is bound to the `(collection, filter-set, order)` combination of
/// the query that produced it and to the last document that query returned.
/// Feeding it back with a different filter-set or order yields undefined
/// pagination results; the store does not detect the mismatch.
///
/// A cursor whose underlying document has since been deleted fails the next
/// query with [`Error::InvalidCursor`](crate::Error::InvalidCursor); callers
/// should restart pagination from the beginning in that case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    /// Create a cursor from its opaque string form.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the opaque cursor string, suitable for round-tripping
    /// through a UI or command line.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PageCursor {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
