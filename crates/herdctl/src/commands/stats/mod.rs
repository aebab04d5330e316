//! Stats subcommand implementations.

mod set;
mod show;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::FileRegistry;

#[derive(Args, Debug)]
pub struct StatsCommand {
    #[command(subcommand)]
    pub command: StatsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StatsSubcommand {
    /// Show hand-entered stats
    Show(show::ShowArgs),

    /// Record hand-entered stats for an agent
    Set(set::SetArgs),
}

pub async fn handle(cmd: StatsCommand, registry: &FileRegistry) -> Result<()> {
    match cmd.command {
        StatsSubcommand::Show(args) => show::run(args, registry).await,
        StatsSubcommand::Set(args) => set::run(args, registry).await,
    }
}
