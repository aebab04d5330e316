//! Delete assignment command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Assignment id
    pub id: String,
}

pub async fn run(args: DeleteArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid assignment id")?;

    registry
        .delete_assignment(&id)
        .await
        .context("Failed to delete assignment")?;

    output::success(&format!("Deleted assignment {}", id));

    Ok(())
}
