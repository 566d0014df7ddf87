//! Domain layer: filter building, record transforms, and aggregation.
//!
//! Everything in this module is pure — no I/O, no shared state. Handlers
//! compose these functions around a single upstream call per request.

pub mod aggregate;
pub mod criteria;
pub mod fields;
pub mod filters;

pub use aggregate::{
    DEFAULT_ROLLUP_LIMIT, RecipientRollup, StatisticsDigest, TrendDirection, classify_trend,
    distinct_values, market_size, rollup_recipients, statistics_digest,
};
pub use criteria::SearchCriteria;
pub use fields::{
    AWARD_FIELDS, COMPETITION_FIELDS, CompetitionRecipient, TransformedAward,
    transform_award_result, transform_competition_recipient,
};
pub use filters::{AwardFilters, build_award_filters};
