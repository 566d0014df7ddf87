//! # fedspend-gateway
//!
//! REST API gateway for USAspending.gov federal contract award data.
//!
//! This crate exposes a small set of HTTP endpoints that proxy queries to
//! the USAspending search API, reshape the responses into simplified JSON
//! payloads, and compute light aggregate statistics — recipient rollups,
//! trend direction, totals and averages. It is consumed by automated
//! agents (GPT-style tool callers) that need normalized, summarized views
//! of award data rather than raw API responses.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── Filter Builder / Transforms / Aggregation (domain/)
//!     │
//!     └── SpendingClient (upstream/) ── USAspending.gov API
//! ```
//!
//! Nothing persists: every entity is built per request and discarded
//! after the response is serialized.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod upstream;
