//! REST endpoint handlers organized by resource.

pub mod awards;
pub mod competition;
pub mod recipients;
pub mod spending;
pub mod system;

use axum::Router;
use chrono::Months;

use crate::app_state::AppState;
use crate::upstream::types::SortOrder;

/// Composes all gateway routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(competition::routes())
        .merge(awards::routes())
        .merge(recipients::routes())
        .merge(spending::routes())
}

/// Upstream sort field used whenever the caller does not choose one.
pub(crate) const DEFAULT_SORT_FIELD: &str = "Award Amount";

/// Returns the `(start, end)` date window covering the last `years_back`
/// years, ending today, formatted as `YYYY-MM-DD`.
pub(crate) fn default_date_window(years_back: u32) -> (String, String) {
    let today = chrono::Utc::now().date_naive();
    let start = today - Months::new(12 * years_back);
    (
        start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// Fills a date field with `default` when it is absent or empty.
pub(crate) fn or_default_date(field: &mut Option<String>, default: String) {
    if field.as_deref().is_none_or(str::is_empty) {
        *field = Some(default);
    }
}

/// Parses a caller-supplied sort order, defaulting to descending.
pub(crate) fn parse_order(order: Option<&str>) -> SortOrder {
    match order {
        Some("asc") => SortOrder::Asc,
        _ => SortOrder::Desc,
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn date_window_is_iso_formatted() {
        let (start, end) = default_date_window(1);
        assert_eq!(start.len(), 10);
        assert_eq!(end.len(), 10);
        assert!(start < end);
    }

    #[test]
    fn empty_date_field_takes_default() {
        let mut field = Some(String::new());
        or_default_date(&mut field, "2023-01-01".to_string());
        assert_eq!(field.as_deref(), Some("2023-01-01"));

        let mut field = Some("2020-06-30".to_string());
        or_default_date(&mut field, "2023-01-01".to_string());
        assert_eq!(field.as_deref(), Some("2020-06-30"));
    }

    #[test]
    fn order_defaults_to_desc() {
        assert_eq!(parse_order(Some("asc")), SortOrder::Asc);
        assert_eq!(parse_order(Some("desc")), SortOrder::Desc);
        assert_eq!(parse_order(Some("sideways")), SortOrder::Desc);
        assert_eq!(parse_order(None), SortOrder::Desc);
    }
}
