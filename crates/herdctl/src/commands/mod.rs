//! Command implementations, one module per noun.

pub mod agent;
pub mod analytics;
pub mod assignment;
pub mod cattle;
pub mod enterprise;
pub mod farmer;
pub mod scan;
pub mod stats;
pub mod user;
