//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::analytics::AnalyticsArgs;
use crate::commands::{
    agent::AgentCommand, assignment::AssignmentCommand, cattle::CattleCommand,
    enterprise::EnterpriseCommand, farmer::FarmerCommand, scan::ScanCommand, stats::StatsCommand,
    user::UserCommand,
};

/// Herdbook livestock registry CLI.
#[derive(Parser, Debug)]
#[command(name = "herdctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Registry data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "HERDBOOK_DATA")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Field agent operations
    Agent(AgentCommand),

    /// Farmer operations
    Farmer(FarmerCommand),

    /// Cattle operations
    Cattle(CattleCommand),

    /// Enterprise operations
    Enterprise(EnterpriseCommand),

    /// Enterprise-agent assignment operations
    Assignment(AssignmentCommand),

    /// Scan-request triage operations
    Scan(ScanCommand),

    /// Hand-entered per-agent statistics
    Stats(StatsCommand),

    /// Live dashboard counts
    Analytics(AnalyticsArgs),

    /// Directory user lookup
    User(UserCommand),
}
