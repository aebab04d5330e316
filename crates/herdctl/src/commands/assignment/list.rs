//! List assignments command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by enterprise id
    #[arg(long, conflicts_with = "agent")]
    pub enterprise: Option<String>,

    /// Filter by agent id
    #[arg(long)]
    pub agent: Option<String>,
}

pub async fn run(args: ListArgs, registry: &FileRegistry) -> Result<()> {
    let assignments = match (&args.enterprise, &args.agent) {
        (Some(enterprise), _) => registry.assignments_by_enterprise(enterprise).await,
        (None, Some(agent)) => registry.assignments_by_agent(agent).await,
        (None, None) => registry.assignments().await,
    }
    .context("Failed to list assignments")?;

    if assignments.is_empty() {
        output::notice("No assignments found.");
        return Ok(());
    }

    for assignment in &assignments {
        output::json(assignment, false)?;
    }

    Ok(())
}
