//! Enterprise-agent assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An agent assigned to work an enterprise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    /// The enterprise this assignment belongs to; the foreign key the
    /// enterprise cascade deletes by.
    pub enterprise_id: String,
    pub agent_id: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating an assignment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub enterprise_id: String,
    pub agent_id: String,
}

/// Partial update of an assignment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}
