//! Assignment subcommand implementations.

mod create;
mod delete;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::FileRegistry;

#[derive(Args, Debug)]
pub struct AssignmentCommand {
    #[command(subcommand)]
    pub command: AssignmentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AssignmentSubcommand {
    /// List assignments by enterprise or agent
    List(list::ListArgs),

    /// Assign an agent to an enterprise
    Create(create::CreateArgs),

    /// Remove an assignment
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: AssignmentCommand, registry: &FileRegistry) -> Result<()> {
    match cmd.command {
        AssignmentSubcommand::List(args) => list::run(args, registry).await,
        AssignmentSubcommand::Create(args) => create::run(args, registry).await,
        AssignmentSubcommand::Delete(args) => delete::run(args, registry).await,
    }
}
