//! List farmers command implementation.

use anyhow::{Context, Result};
use clap::Args;

use herdbook_core::PageCursor;

use crate::context::FileRegistry;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Agent id whose farmers to list
    #[arg(long)]
    pub agent: String,

    /// Records per page
    #[arg(long, default_value_t = 10)]
    pub page_size: u32,

    /// Cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Fetch every page instead of stopping after one
    #[arg(long, conflicts_with = "cursor")]
    pub all: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, registry: &FileRegistry) -> Result<()> {
    let mut cursor = args.cursor.clone().map(PageCursor::new);

    loop {
        let page = match registry
            .farmers_by_agent(&args.agent, args.page_size, cursor.take())
            .await
        {
            Ok(page) => page,
            Err(error) if error.is_invalid_cursor() => {
                // The record the cursor pointed at is gone; the listing can
                // only be restarted from the top.
                output::notice("Cursor is no longer valid; restart without --cursor.");
                return Err(error).context("Stale cursor");
            }
            Err(error) => return Err(error).context("Failed to list farmers"),
        };

        if page.items.is_empty() {
            output::notice("No farmers found.");
            return Ok(());
        }

        for farmer in &page.items {
            output::json(farmer, args.pretty)?;
        }

        if !page.has_more {
            return Ok(());
        }
        if !args.all {
            if let Some(next) = &page.next_cursor {
                eprintln!();
                output::notice(&format!("Next cursor: {}", next));
            }
            return Ok(());
        }
        cursor = page.next_cursor;
    }
}
