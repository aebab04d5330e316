//! Show cattle command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::DocId;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Cattle record id
    pub id: String,
}

pub async fn run(args: ShowArgs, registry: &FileRegistry) -> Result<()> {
    let id = DocId::new(&args.id).context("Invalid cattle id")?;
    let cattle = registry
        .cattle_details(&id)
        .await
        .context("Failed to fetch cattle record")?;

    output::field("Tag", &cattle.tag_no);
    output::field("Owner", &cattle.farmer_id);
    output::field("Breed", &cattle.breed);
    output::field("Age", &cattle.age.to_string());
    output::field("Weight", &format!("{} kg", cattle.weight));
    output::field("Registered by", &cattle.registered_by);
    if cattle.selected == Some(true) {
        output::field("Selected", "yes");
    }
    for (view, url) in cattle.image_urls.iter().flatten() {
        output::field(view, url);
    }

    Ok(())
}
