//! Create assignment command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_registry::model::NewAssignment;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Enterprise id
    #[arg(long)]
    pub enterprise: String,

    /// Agent id
    #[arg(long)]
    pub agent: String,
}

pub async fn run(args: CreateArgs, registry: &FileRegistry) -> Result<()> {
    let new = NewAssignment {
        enterprise_id: args.enterprise,
        agent_id: args.agent,
    };

    let id = registry
        .create_assignment(&new)
        .await
        .context("Failed to create assignment")?;

    output::success(&format!("Created assignment {}", id));

    Ok(())
}
