//! Field agents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an agent is currently active in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
}

/// A field agent who registers farmers and cattle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub status: AgentStatus,
    pub created_at: DateTime<Utc>,
}
