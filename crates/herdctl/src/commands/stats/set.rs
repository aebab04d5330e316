//! Set stats command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_registry::model::AgentStats;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Agent id
    #[arg(long)]
    pub agent: String,

    /// Farmer count
    #[arg(long)]
    pub farmers: u32,

    /// Cattle count
    #[arg(long)]
    pub cattle: u32,
}

pub async fn run(args: SetArgs, registry: &FileRegistry) -> Result<()> {
    let stats = AgentStats {
        farmer_count: args.farmers,
        cattle_count: args.cattle,
    };

    registry
        .set_custom_stats(&args.agent, &stats)
        .await
        .context("Failed to record stats")?;

    output::success(&format!("Recorded stats for {}", args.agent));

    Ok(())
}
