//! Data Transfer Objects for REST request/response serialization.
//!
//! Request bodies flatten [`crate::domain::SearchCriteria`] so criteria
//! fields sit at the top level of the JSON body alongside per-endpoint
//! options.

pub mod awards_dto;
pub mod competition_dto;
pub mod recipients_dto;
pub mod spending_dto;

pub use awards_dto::*;
pub use competition_dto::*;
pub use recipients_dto::*;
pub use spending_dto::*;
