//! Select cattle command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Cattle record id
    pub id: String,

    /// Submit the flag unset instead of set
    #[arg(long)]
    pub deselect: bool,
}

pub async fn run(args: SelectArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid cattle id")?;

    registry
        .set_exclusive_selection(&id, !args.deselect)
        .await
        .context("Failed to update selection")?;

    output::success(&format!("Selected {}", id));

    Ok(())
}
