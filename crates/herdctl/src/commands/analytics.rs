//! Analytics command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct AnalyticsArgs {
    /// Print the full breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: AnalyticsArgs, registry: &FileRegistry) -> Result<()> {
    let analytics = registry
        .analytics()
        .await
        .context("Failed to compute analytics")?;

    if args.json {
        return output::json(&analytics, true);
    }

    output::field("Agents", &analytics.total_agents.to_string());
    output::field("Farmers", &analytics.total_farmers.to_string());
    output::field("Enterprises", &analytics.total_enterprises.to_string());
    output::field("Cattle", &analytics.total_cattle.to_string());

    if !analytics.enterprise_breakdown.is_empty() {
        println!();
        for enterprise in &analytics.enterprise_breakdown {
            output::field(
                &enterprise.name,
                &format!("{} cattle", enterprise.cattle_count),
            );
        }
    }

    if !analytics.agent_performance.is_empty() {
        println!();
        for agent in &analytics.agent_performance {
            output::field(&agent.name, &format!("{} registered", agent.cattle_registered));
        }
    }

    Ok(())
}
