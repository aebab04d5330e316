//! Submit scan request command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Submitting agent id
    #[arg(long)]
    pub agent: String,

    /// Muzzle photo file
    #[arg(long)]
    pub image: PathBuf,
}

pub async fn run(args: SubmitArgs, registry: &FileRegistry) -> Result<()> {
    let image = fs::read(&args.image).context("Failed to read image file")?;

    let id = registry
        .create_scan_request(&args.agent, &image)
        .await
        .context("Failed to submit scan request")?;

    output::success(&format!("Submitted scan request {}", id));

    Ok(())
}
