//! herdbook-directory - HTTP-backed user directory client.
//!
//! Implements the [`UserDirectory`](herdbook_core::UserDirectory) seam
//! against the hosted identity provider's REST API.

mod client;

pub use client::HttpDirectory;
