//! List enterprises command implementation.

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
    let enterprises = registry
        .enterprises()
        .await
        .context("Failed to list enterprises")?;

    if enterprises.is_empty() {
        output::notice("No enterprises found.");
        return Ok(());
    }

    for enterprise in &enterprises {
        output::json(enterprise, args.pretty)?;
    }

    Ok(())
}
