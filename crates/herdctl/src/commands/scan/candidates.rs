//! Scan candidates command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct CandidatesArgs {
    /// Agent whose farmers' cattle to consider
    #[arg(long)]
    pub agent: String,
}

pub async fn run(args: CandidatesArgs, registry: &FileRegistry) -> Result<()> {
    let candidates = registry
        .cattle_for_scan(&args.agent)
        .await
        .context("Failed to list scan candidates")?;

    if candidates.is_empty() {
        output::notice("No candidate cattle for this agent.");
        return Ok(());
    }

    for head in &candidates {
        output::json(head, false)?;
    }

    Ok(())
}
