//! Document id type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated document identifier.
///
/// Ids are assigned by the document store on create, but callers may also
/// address documents by externally chosen ids (for example, statistics
/// documents keyed by agent id). Because ids become file names in the
/// file-backed store, the charset is restricted.
///
/// # Example
///
/// ```
/// use herdbook_core::DocId;
///
/// let id = DocId::new("9f8a2c1e04b34d6c").unwrap();
/// assert_eq!(id.as_str(), "9f8a2c1e04b34d6c");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocId(String);

impl DocId {
    /// Create a new document id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, too long, or contains
    /// characters outside `[A-Za-z0-9._~-]`.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::DocId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.len() > 128 {
            return Err(InvalidInputError::DocId {
                value: s.to_string(),
                reason: "exceeds maximum length of 128 characters".to_string(),
            }
            .into());
        }

        if s == "." || s == ".." {
            return Err(InvalidInputError::DocId {
                value: s.to_string(),
                reason: "cannot be '.' or '..'".to_string(),
            }
            .into());
        }

        for c in s.chars() {
            if !c.is_ascii_alphanumeric() && c != '.' && c != '-' && c != '_' && c != '~' {
                return Err(InvalidInputError::DocId {
                    value: s.to_string(),
                    reason: format!("contains invalid character '{}'", c),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DocId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DocId> for String {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
