//! Farmer subcommand implementations.

mod add;
mod delete;
mod list;
mod show;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::FileRegistry;

#[derive(Args, Debug)]
pub struct FarmerCommand {
    #[command(subcommand)]
    pub command: FarmerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FarmerSubcommand {
    /// List an agent's farmers, one page at a time
    List(list::ListArgs),

    /// Register a farmer
    Add(add::AddArgs),

    /// Show one farmer
    Show(show::ShowArgs),

    /// Delete a farmer and every cattle record they own
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: FarmerCommand, registry: &FileRegistry) -> Result<()> {
    match cmd.command {
        FarmerSubcommand::List(args) => list::run(args, registry).await,
        FarmerSubcommand::Add(args) => add::run(args, registry).await,
        FarmerSubcommand::Show(args) => show::run(args, registry).await,
        FarmerSubcommand::Delete(args) => delete::run(args, registry).await,
    }
}
