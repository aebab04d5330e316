//! Trait seams for the external collaborators.

mod directory;
mod objects;
mod store;

pub use directory::{UserDirectory, UserProfile};
pub use objects::ObjectStore;
pub use store::DocumentStore;
