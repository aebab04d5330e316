//! Object store key type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated object-store key.
///
/// Keys are `/`-separated paths such as `farmers/<id>/profile` or
/// `cattle/<id>/muzzle`. Each segment follows the same charset rules as
/// [`DocId`](crate::DocId) so keys map safely onto filesystem paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new object key from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty, has empty or dot-only
    /// segments, or contains characters outside `[A-Za-z0-9._~-/]`.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key's path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::ObjectKey {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        for segment in s.split('/') {
            if segment.is_empty() {
                return Err(InvalidInputError::ObjectKey {
                    value: s.to_string(),
                    reason: "contains an empty path segment".to_string(),
                }
                .into());
            }

            if segment == "." || segment == ".." {
                return Err(InvalidInputError::ObjectKey {
                    value: s.to_string(),
                    reason: "segments cannot be '.' or '..'".to_string(),
                }
                .into());
            }

            for c in segment.chars() {
                if !c.is_ascii_alphanumeric() && c != '.' && c != '-' && c != '_' && c != '~' {
                    return Err(InvalidInputError::ObjectKey {
                        value: s.to_string(),
                        reason: format!("contains invalid character '{}'", c),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ObjectKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ObjectKey> for String {
    fn from(key: ObjectKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_nested_key() {
        let key = ObjectKey::new("farmers/abc123/profile").unwrap();
        assert_eq!(key.segments().count(), 3);
    }

    #[test]
    fn valid_flat_key() {
        assert!(ObjectKey::new("scan").is_ok());
    }

    #[test]
    fn invalid_empty() {
        assert!(ObjectKey::new("").is_err());
    }

    #[test]
    fn invalid_empty_segment() {
        assert!(ObjectKey::new("farmers//profile").is_err());
        assert!(ObjectKey::new("/farmers").is_err());
    }

    #[test]
    fn invalid_traversal() {
        assert!(ObjectKey::new("farmers/../etc").is_err());
    }

    #[test]
    fn invalid_character() {
        assert!(ObjectKey::new("farmers/a b").is_err());
    }
}
