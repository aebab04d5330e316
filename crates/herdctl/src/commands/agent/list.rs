//! List agents command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, registry: &FileRegistry) -> Result<()> {
    let agents = registry.agents().await.context("Failed to list agents")?;

    if agents.is_empty() {
        output::notice("No agents found.");
        return Ok(());
    }

    for agent in &agents {
        output::json(agent, args.pretty)?;
    }

    Ok(())
}
