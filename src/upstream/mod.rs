//! Upstream collaborator: the USAspending.gov v2 search API.

pub mod client;
pub mod error;
pub mod types;

pub use client::SpendingClient;
pub use error::UpstreamError;
