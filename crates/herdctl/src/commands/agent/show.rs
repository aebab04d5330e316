//! Show agent command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Agent id
    pub id: String,
}

pub async fn run(args: ShowArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid agent id")?;
    let agent = registry.agent(&id).await.context("Failed to fetch agent")?;

    output::field("Name", &agent.name);
    output::field("Phone", &agent.phone_number);
    output::field("Email", &agent.email);
    output::field("Status", &format!("{:?}", agent.status).to_lowercase());
    output::field("Registered", &agent.created_at.to_rfc3339());

    Ok(())
}
