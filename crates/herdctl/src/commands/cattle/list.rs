//! List cattle command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Owning farmer id
    #[arg(long, conflicts_with = "agent", required_unless_present = "agent")]
    pub farmer: Option<String>,

    /// Registering agent id
    #[arg(long)]
    pub agent: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, registry: &FileRegistry) -> Result<()> {
    let cattle = match (&args.farmer, &args.agent) {
        (Some(farmer), _) => registry.cattle_by_farmer(farmer).await,
        (None, Some(agent)) => registry.cattle_by_agent(agent).await,
        (None, None) => unreachable!("clap enforces one of --farmer/--agent"),
    }
    .context("Failed to list cattle")?;

    if cattle.is_empty() {
        output::notice("No cattle found.");
        return Ok(());
    }

    for head in &cattle {
        output::json(head, args.pretty)?;
    }

    Ok(())
}
