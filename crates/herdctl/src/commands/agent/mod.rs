//! Agent subcommand implementations.

mod list;
mod show;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::FileRegistry;

#[derive(Args, Debug)]
pub struct AgentCommand {
    #[command(subcommand)]
    pub command: AgentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AgentSubcommand {
    /// List field agents
    List(list::ListArgs),

    /// Show one agent
    Show(show::ShowArgs),
}

pub async fn handle(cmd: AgentCommand, registry: &FileRegistry) -> Result<()> {
    match cmd.command {
        AgentSubcommand::List(args) => list::run(args, registry).await,
        AgentSubcommand::Show(args) => show::run(args, registry).await,
    }
}
