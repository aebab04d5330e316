//! Delete cattle command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Cattle record id
    pub id: String,
}

pub async fn run(args: DeleteArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid cattle id")?;

    registry
        .delete_cattle(&id)
        .await
        .context("Failed to delete cattle record")?;

    output::success(&format!("Deleted {}", id));

    Ok(())
}
