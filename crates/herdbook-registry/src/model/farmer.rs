//! Farmers and enterprises.
//!
//! Enterprises are stored in the `farmers` collection with
//! `farmerType: "Enterprise"`, so they get their own decoded shape here
//! (they carry agent assignments instead of an agent foreign key).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a record in the `farmers` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmerType {
    Individual,
    Enterprise,
}

/// A registered farmer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub aadhaar_number: String,
    pub village: String,
    /// The agent who registered this farmer; the owner key for agent-scoped
    /// listings.
    pub agent_id: String,
    pub farmer_type: FarmerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for registering a farmer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFarmer {
    pub name: String,
    pub phone_number: String,
    pub aadhaar_number: String,
    pub village: String,
    pub agent_id: String,
    pub farmer_type: FarmerType,
}

/// Partial update of a farmer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

/// An enterprise account in the `farmers` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    pub farmer_type: FarmerType,
    #[serde(default)]
    pub total_cattle: u32,
    #[serde(default)]
    pub assigned_agents: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating an enterprise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnterprise {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
}

/// Partial update of an enterprise.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterprisePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_agents: Option<Vec<String>>,
}
