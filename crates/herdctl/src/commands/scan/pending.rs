//! Pending scan requests command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct PendingArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: PendingArgs, registry: &FileRegistry) -> Result<()> {
    let pending = registry
        .pending_scan_requests()
        .await
        .context("Failed to list pending scan requests")?;

    if pending.is_empty() {
        output::notice("No pending scan requests.");
        return Ok(());
    }

    for request in &pending {
        output::json(request, args.pretty)?;
    }

    Ok(())
}
