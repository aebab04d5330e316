//! Add farmer command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use herdbook_registry::model::{FarmerType, NewFarmer};

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Farmer name
    #[arg(long)]
    pub name: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Aadhaar number
    #[arg(long)]
    pub aadhaar: String,

    /// Village
    #[arg(long)]
    pub village: String,

    /// Registering agent id
    #[arg(long)]
    pub agent: String,

    /// Profile photo file
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

pub async fn run(args: AddArgs, registry: &FileRegistry) -> Result<()> {
    if registry
        .farmer_exists(&args.phone)
        .await
        .context("Failed to check for existing farmer")?
    {
        anyhow::bail!("A farmer with phone number {} already exists", args.phone);
    }

    let photo = args
        .photo
        .as_ref()
        .map(fs::read)
        .transpose()
        .context("Failed to read photo file")?;

    let new = NewFarmer {
        name: args.name,
        phone_number: args.phone,
        aadhaar_number: args.aadhaar,
        village: args.village,
        agent_id: args.agent,
        farmer_type: FarmerType::Individual,
    };

    let id = registry
        .add_farmer(&new, photo.as_deref())
        .await
        .context("Failed to register farmer")?;

    output::success(&format!("Registered farmer {}", id));

    Ok(())
}
