//! Enterprise subcommand implementations.

mod add;
mod delete;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::FileRegistry;

#[derive(Args, Debug)]
pub struct EnterpriseCommand {
    #[command(subcommand)]
    pub command: EnterpriseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EnterpriseSubcommand {
    /// List enterprises
    List(list::ListArgs),

    /// Create an enterprise
    Add(add::AddArgs),

    /// Delete an enterprise and its assignments
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: EnterpriseCommand, registry: &FileRegistry) -> Result<()> {
    match cmd.command {
        EnterpriseSubcommand::List(args) => list::run(args, registry).await,
        EnterpriseSubcommand::Add(args) => add::run(args, registry).await,
        EnterpriseSubcommand::Delete(args) => delete::run(args, registry).await,
    }
}
