//! Cattle subcommand implementations.

mod delete;
mod list;
mod select;
mod show;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::FileRegistry;

#[derive(Args, Debug)]
pub struct CattleCommand {
    #[command(subcommand)]
    pub command: CattleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CattleSubcommand {
    /// List cattle by owner or registering agent
    List(list::ListArgs),

    /// Show one cattle record
    Show(show::ShowArgs),

    /// Make a record the dashboard's selected one
    Select(select::SelectArgs),

    /// Delete a cattle record
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: CattleCommand, registry: &FileRegistry) -> Result<()> {
    match cmd.command {
        CattleSubcommand::List(args) => list::run(args, registry).await,
        CattleSubcommand::Show(args) => show::run(args, registry).await,
        CattleSubcommand::Select(args) => select::run(args, registry).await,
        CattleSubcommand::Delete(args) => delete::run(args, registry).await,
    }
}
