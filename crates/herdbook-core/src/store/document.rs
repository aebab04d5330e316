//! Documents and field maps.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};
use crate::types::DocId;
use crate::Result;

/// The reserved field name for the store-assigned creation timestamp.
pub const CREATED_AT: &str = "createdAt";

/// The fields of a document.
///
/// Guaranteed to be a JSON object. Field names follow the stored
/// convention (`agentId`, `tagNo`, ...); this layer does not interpret
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(Map<String, Value>);

impl FieldMap {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field map from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(InvalidInputError::Other {
                message: format!("document fields must be a JSON object, got {}", other),
            }
            .into()),
        }
    }

    /// Serialize a value into a field map.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not serialize to a JSON object.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| InvalidInputError::Other {
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Set a field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Set a field, builder style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Merge another field map into this one, overwriting existing fields.
    pub fn merge_from(&mut self, other: &FieldMap) {
        for (field, value) in &other.0 {
            self.0.insert(field.clone(), value.clone());
        }
    }

    /// Whether the map has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the map into the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// A document from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The store-assigned (or externally chosen) document id.
    pub id: DocId,

    /// The store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,

    /// The document fields.
    pub fields: FieldMap,
}

impl Document {
    /// Decode the document into a typed value.
    ///
    /// The `id` and `createdAt` fields are injected alongside the stored
    /// fields before deserializing, so domain types can carry both.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the fields do not match the target shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let mut object = self.fields.clone().into_inner();
        object.insert("id".to_string(), Value::String(self.id.to_string()));
        object.insert(
            CREATED_AT.to_string(),
            serde_json::to_value(self.created_at).map_err(decode_error)?,
        );
        serde_json::from_value(Value::Object(object)).map_err(decode_error)
    }
}

fn decode_error(e: serde_json::Error) -> Error {
    InvalidInputError::Decode {
        message: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_rejects_non_object() {
        assert!(FieldMap::from_value(json!([1, 2])).is_err());
        assert!(FieldMap::from_value(json!("x")).is_err());
        assert!(FieldMap::from_value(json!({"a": 1})).is_ok());
    }

    #[test]
    fn merge_overwrites() {
        let mut fields = FieldMap::new().with("a", 1).with("b", 2);
        fields.merge_from(&FieldMap::new().with("b", 3).with("c", 4));
        assert_eq!(fields.get("a"), Some(&json!(1)));
        assert_eq!(fields.get("b"), Some(&json!(3)));
        assert_eq!(fields.get("c"), Some(&json!(4)));
    }

    #[test]
    fn decode_injects_id_and_timestamp() {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Row {
            id: String,
            created_at: DateTime<Utc>,
            name: String,
        }

        let doc = Document {
            id: DocId::new("abc").unwrap(),
            created_at: Utc::now(),
            fields: FieldMap::new().with("name", "Anju"),
        };

        let row: Row = doc.decode().unwrap();
        assert_eq!(row.id, "abc");
        assert_eq!(row.name, "Anju");
        assert_eq!(row.created_at, doc.created_at);
    }
}
