//! herdctl - CLI for the herdbook livestock registry.
//!
//! A thin wrapper over the `herdbook-registry` library for dashboard staff
//! to inspect and maintain the registry from a terminal.

mod cli;
mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let registry = context::open_registry(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Agent(cmd) => commands::agent::handle(cmd, &registry).await,
        Commands::Farmer(cmd) => commands::farmer::handle(cmd, &registry).await,
        Commands::Cattle(cmd) => commands::cattle::handle(cmd, &registry).await,
        Commands::Enterprise(cmd) => commands::enterprise::handle(cmd, &registry).await,
        Commands::Assignment(cmd) => commands::assignment::handle(cmd, &registry).await,
        Commands::Scan(cmd) => commands::scan::handle(cmd, &registry).await,
        Commands::Stats(cmd) => commands::stats::handle(cmd, &registry).await,
        Commands::Analytics(args) => commands::analytics::run(args, &registry).await,
        Commands::User(cmd) => commands::user::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
