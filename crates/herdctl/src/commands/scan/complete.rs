//! Complete scan request command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Scan request id
    pub id: String,

    /// The matched cattle record id
    #[arg(long)]
    pub cattle: String,
}

pub async fn run(args: CompleteArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid scan request id")?;

    registry
        .complete_scan_request(&id, &args.cattle)
        .await
        .context("Failed to complete scan request")?;

    output::success(&format!("Completed scan request {}", id));

    Ok(())
}
