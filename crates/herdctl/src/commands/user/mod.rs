//! Directory user subcommand implementations.

mod show;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Look a user up in the identity provider's directory
    Show(show::ShowArgs),
}

pub async fn handle(cmd: UserCommand) -> Result<()> {
    match cmd.command {
        UserSubcommand::Show(args) => show::run(args).await,
    }
}
