//! Show directory user command implementation.

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use herdbook_core::UserDirectory;
use herdbook_directory::HttpDirectory;

use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Directory user id
    pub id: String,

    /// Directory API base URL
    #[arg(long, env = "HERDBOOK_DIRECTORY_URL")]
    pub directory_url: Url,

    /// Directory API secret key
    #[arg(long, env = "HERDBOOK_DIRECTORY_SECRET", hide_env_values = true)]
    pub secret: String,
}

pub async fn run(args: ShowArgs) -> Result<()> {
    let directory = HttpDirectory::new(args.directory_url, args.secret);

    let profile = directory
        .user(&args.id)
        .await
        .context("Failed to fetch user")?;

    if let Some(name) = &profile.first_name {
        output::field("First name", name);
    }
    if let Some(name) = &profile.last_name {
        output::field("Last name", name);
    }
    if let Some(email) = &profile.email {
        output::field("Email", email);
    }
    if let Some(phone) = &profile.phone {
        output::field("Phone", phone);
    }
    if let Some(url) = &profile.image_url {
        output::field("Image", url);
    }

    Ok(())
}
