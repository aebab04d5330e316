//! Reject scan request command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct RejectArgs {
    /// Scan request id
    pub id: String,
}

pub async fn run(args: RejectArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid scan request id")?;

    registry
        .reject_scan_request(&id)
        .await
        .context("Failed to reject scan request")?;

    output::success(&format!("Rejected scan request {}", id));

    Ok(())
}
