//! Mark scan request unmatched command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct NotFoundArgs {
    /// Scan request id
    pub id: String,
}

pub async fn run(args: NotFoundArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid scan request id")?;

    registry
        .mark_scan_not_found(&id)
        .await
        .context("Failed to mark scan request")?;

    output::success(&format!("Marked scan request {} as not found", id));

    Ok(())
}
