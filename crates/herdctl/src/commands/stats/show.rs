//! Show stats command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Show one agent's stats instead of all
    #[arg(long)]
    pub agent: Option<String>,
}

pub async fn run(args: ShowArgs, registry: &FileRegistry) -> Result<()> {
    if let Some(agent) = &args.agent {
        match registry
            .custom_stats_for(agent)
            .await
            .context("Failed to fetch stats")?
        {
            Some(stats) => output::json(&stats, true)?,
            None => output::notice("No stats recorded for this agent."),
        }
        return Ok(());
    }

    let all = registry.custom_stats().await.context("Failed to fetch stats")?;
    if all.is_empty() {
        output::notice("No stats recorded.");
        return Ok(());
    }
    output::json(&all, true)?;

    Ok(())
}
