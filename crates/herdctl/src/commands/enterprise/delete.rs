//! Delete enterprise command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Enterprise id
    pub id: String,
}

pub async fn run(args: DeleteArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid enterprise id")?;

    registry
        .delete_enterprise(&id)
        .await
        .context("Failed to delete enterprise")?;

    output::success(&format!("Deleted enterprise {} and its assignments", id));

    Ok(())
}
