//! Show farmer command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Farmer id
    pub id: String,

    /// Also list the farmer's cattle
    #[arg(long)]
    pub cattle: bool,
}

pub async fn run(args: ShowArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid farmer id")?;
    let farmer = registry.farmer(&id).await.context("Failed to fetch farmer")?;

    output::field("Name", &farmer.name);
    output::field("Phone", &farmer.phone_number);
    output::field("Village", &farmer.village);
    output::field("Agent", &farmer.agent_id);
    if let Some(url) = &farmer.photo_url {
        output::field("Photo", url);
    }
    output::field("Registered", &farmer.created_at.to_rfc3339());

    if args.cattle {
        let cattle = registry
            .cattle_by_farmer(&args.id)
            .await
            .context("Failed to list cattle")?;
        println!();
        for head in &cattle {
            output::json(head, false)?;
        }
    }

    Ok(())
}
