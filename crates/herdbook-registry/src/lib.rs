//! herdbook-registry - Registry operations for the livestock registry.
//!
//! All business operations flow through a [`Registry`] handle constructed
//! with explicit document-store and object-store implementations.
//!
//! # Example
//!
//! ```no_run
//! use herdbook_file::{FileObjects, FileStore};
//! use herdbook_registry::Registry;
//!
//! # async fn example() -> Result<(), herdbook_core::Error> {
//! let registry = Registry::new(FileStore::new("data"), FileObjects::new("data"));
//!
//! let mut cursor = None;
//! loop {
//!     let page = registry.farmers_by_agent("agent_1", 10, cursor).await?;
//!     for farmer in &page.items {
//!         println!("{}: {}", farmer.id, farmer.name);
//!     }
//!     if !page.has_more {
//!         break;
//!     }
//!     cursor = page.next_cursor;
//! }
//! # Ok(())
//! # }
//! ```

mod agents;
mod analytics;
mod assignments;
pub(crate) mod batch;
mod cattle;
mod enterprises;
mod farmers;
pub mod model;
mod paging;
mod registry;
mod scans;
mod selection;
mod stats;
mod unassigned;

pub use paging::Page;
pub use registry::Registry;
