//! Delete farmer command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Farmer id
    pub id: String,
}

pub async fn run(args: DeleteArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid farmer id")?;

    registry
        .delete_farmer(&id)
        .await
        .context("Failed to delete farmer")?;

    output::success(&format!("Deleted farmer {} and their cattle", id));

    Ok(())
}
