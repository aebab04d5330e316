//! Domain record types.
//!
//! Stored field names use the collection's camelCase convention, so every
//! type here renames accordingly. `New*` types carry the caller-supplied
//! fields for creation (the store assigns `id` and `createdAt`); `*Patch`
//! types carry optional fields for partial updates.

mod agent;
mod assignment;
mod cattle;
mod farmer;
mod scan;
mod stats;

pub use agent::{Agent, AgentStatus};
pub use assignment::{Assignment, AssignmentPatch, NewAssignment};
pub use cattle::{Cattle, CattlePatch, NewCattle, NewUnassignedCattle, UnassignedCattle};
pub use farmer::{Enterprise, EnterprisePatch, Farmer, FarmerPatch, FarmerType, NewEnterprise, NewFarmer};
pub use scan::{ScanRequest, ScanResponse, ScanStatus};
pub use stats::{AgentStats, Analytics, AgentPerformance, EnterpriseBreakdown};
