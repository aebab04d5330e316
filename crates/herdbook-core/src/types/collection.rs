//! Collection name type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a document collection.
///
/// Collection names are application constants (`farmers`, `cattle`, ...),
/// not user input, so construction is infallible.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(String);

impl Collection {
    /// Create a collection name.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the collection name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Collection {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Collection {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
