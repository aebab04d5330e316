//! Add enterprise command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_registry::model::NewEnterprise;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Enterprise name
    #[arg(long)]
    pub name: String,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Village
    #[arg(long)]
    pub village: Option<String>,
}

pub async fn run(args: AddArgs, registry: &FileRegistry) -> Result<()> {
    let new = NewEnterprise {
        name: args.name,
        phone_number: args.phone,
        village: args.village,
    };

    let id = registry
        .add_enterprise(&new)
        .await
        .context("Failed to create enterprise")?;

    output::success(&format!("Created enterprise {}", id));

    Ok(())
}
