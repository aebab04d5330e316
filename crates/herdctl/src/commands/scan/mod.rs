//! Scan-request subcommand implementations.

mod candidates;
mod complete;
mod not_found;
mod pending;
mod reject;
mod submit;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::FileRegistry;

#[derive(Args, Debug)]
pub struct ScanCommand {
    #[command(subcommand)]
    pub command: ScanSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ScanSubcommand {
    /// Submit a scan request for an agent
    Submit(submit::SubmitArgs),

    /// List requests awaiting triage
    Pending(pending::PendingArgs),

    /// List candidate cattle for an agent's request
    Candidates(candidates::CandidatesArgs),

    /// Resolve a request as matched
    Complete(complete::CompleteArgs),

    /// Resolve a request as rejected
    Reject(reject::RejectArgs),

    /// Resolve a request as unmatched
    NotFound(not_found::NotFoundArgs),
}

pub async fn handle(cmd: ScanCommand, registry: &FileRegistry) -> Result<()> {
    match cmd.command {
        ScanSubcommand::Submit(args) => submit::run(args, registry).await,
        ScanSubcommand::Pending(args) => pending::run(args, registry).await,
        ScanSubcommand::Candidates(args) => candidates::run(args, registry).await,
        ScanSubcommand::Complete(args) => complete::run(args, registry).await,
        ScanSubcommand::Reject(args) => reject::run(args, registry).await,
        ScanSubcommand::NotFound(args) => not_found::run(args, registry).await,
    }
}
