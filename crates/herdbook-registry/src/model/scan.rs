//! Scan requests.
//!
//! Agents in the field submit a muzzle photo; dashboard staff triage the
//! request against the cattle database and resolve it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Triage state of a scan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// Awaiting staff triage.
    Pending,
    /// Matched to a cattle record.
    Completed,
    /// Rejected by staff.
    Rejected,
    /// No matching cattle found.
    NotFound,
}

impl ScanStatus {
    /// The stored field value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Pending => "pending",
            ScanStatus::Completed => "completed",
            ScanStatus::Rejected => "rejected",
            ScanStatus::NotFound => "not_found",
        }
    }
}

/// The resolution attached to a completed scan request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub cattle_id: String,
    pub timestamp: DateTime<Utc>,
}

/// A scan request submitted by an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub id: String,
    pub agent_id: String,
    /// URL of the submitted scan image.
    pub scan_image: String,
    pub status: ScanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_data: Option<ScanResponse>,
    pub created_at: DateTime<Utc>,
}
