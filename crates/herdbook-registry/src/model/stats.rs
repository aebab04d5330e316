//! Manually maintained statistics and computed analytics.

use serde::{Deserialize, Serialize};

/// Hand-entered per-agent counts, maintained by dashboard staff
/// independently of the live record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    pub farmer_count: u32,
    pub cattle_count: u32,
}

/// Cattle count for one enterprise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseBreakdown {
    pub id: String,
    pub name: String,
    pub cattle_count: usize,
}

/// Registration count for one agent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformance {
    pub id: String,
    pub name: String,
    pub cattle_registered: usize,
}

/// Live counts computed from the collections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_enterprises: usize,
    pub total_agents: usize,
    pub total_farmers: usize,
    pub total_cattle: usize,
    pub enterprise_breakdown: Vec<EnterpriseBreakdown>,
    pub agent_performance: Vec<AgentPerformance>,
}
