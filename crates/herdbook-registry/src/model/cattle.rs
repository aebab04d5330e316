//! Cattle records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered head of cattle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cattle {
    pub id: String,
    /// The ear-tag number, unique across the herd.
    pub tag_no: String,
    /// The owning farmer; the owner key for farmer-scoped listings.
    pub farmer_id: String,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    /// The agent who registered this record.
    pub registered_by: String,
    /// Uploaded image URLs keyed by view (muzzle, side, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<BTreeMap<String, String>>,
    /// The dashboard's single-selection flag. At most one record across the
    /// whole collection carries `true`; only the selection coordinator
    /// writes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for registering cattle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCattle {
    pub tag_no: String,
    pub farmer_id: String,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    pub registered_by: String,
}

/// Partial update of a cattle record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CattlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A scanned head of cattle not yet attached to a farmer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedCattle {
    pub id: String,
    pub tag_no: String,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    pub registered_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<BTreeMap<String, String>>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for an unassigned cattle record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUnassignedCattle {
    pub tag_no: String,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    pub registered_by: String,
}
