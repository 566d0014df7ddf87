//! In-memory aggregation over a single page of upstream results.
//!
//! All routines are pure and infallible: malformed individual records
//! degrade to zero/empty values instead of aborting the batch.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::fields::{record_amount, record_str};
use crate::upstream::types::{AwardRecord, TrendPoint};

/// Default number of recipients returned by competition analysis.
pub const DEFAULT_ROLLUP_LIMIT: usize = 20;

/// Per-recipient aggregate over one result set.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipientRollup {
    /// Recipient legal business name (the grouping key).
    pub name: String,
    /// Recipient unique entity identifier, taken from the first record seen.
    pub uei: String,
    /// Accumulated award dollars.
    pub total_amount: f64,
    /// Number of awards rolled up.
    pub award_count: usize,
    /// Identifiers of the contributing awards.
    pub award_ids: Vec<String>,
}

/// Groups awards by recipient name, accumulating amounts and counts, then
/// returns the top `limit` recipients by total amount descending.
///
/// Records with no recipient name group under `"Unknown"`. Input order does
/// not affect the totals.
#[must_use]
pub fn rollup_recipients(records: &[AwardRecord], limit: usize) -> Vec<RecipientRollup> {
    let mut by_name: HashMap<String, RecipientRollup> = HashMap::new();

    for record in records {
        let mut name = record_str(record, "Recipient Name");
        if name.is_empty() {
            name = "Unknown".to_string();
        }
        let entry = by_name
            .entry(name.clone())
            .or_insert_with(|| RecipientRollup {
                name,
                uei: record_str(record, "Recipient UEI"),
                total_amount: 0.0,
                award_count: 0,
                award_ids: Vec::new(),
            });
        entry.total_amount += record_amount(record, "Award Amount");
        entry.award_count += 1;
        entry.award_ids.push(record_str(record, "Award ID"));
    }

    let mut rollups: Vec<RecipientRollup> = by_name.into_values().collect();
    rollups.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
    rollups.truncate(limit);
    rollups
}

/// Sums the total amounts of the already-truncated top recipients.
///
/// Deliberately scoped to the rollups passed in, not the full matching
/// population: the reported market size covers only the top-N shown.
#[must_use]
pub fn market_size(rollups: &[RecipientRollup]) -> f64 {
    rollups.iter().map(|r| r.total_amount).sum()
}

/// Descriptive statistics over one page of awards.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatisticsDigest {
    /// Sum of award amounts.
    pub total_award_amount: f64,
    /// Number of awards in the page.
    pub award_count: usize,
    /// Mean award amount, 0 when the page is empty.
    pub average_award: f64,
    /// Up to 5 distinct awarding agencies, first-seen order.
    pub top_agencies: Vec<String>,
    /// Up to 10 distinct NAICS codes, first-seen order.
    pub naics_codes: Vec<String>,
}

/// Computes the statistics digest for a page of award records.
#[must_use]
pub fn statistics_digest(records: &[AwardRecord]) -> StatisticsDigest {
    let total_award_amount: f64 = records
        .iter()
        .map(|r| record_amount(r, "Award Amount"))
        .sum();
    let award_count = records.len();
    let average_award = if award_count == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        {
            total_award_amount / award_count as f64
        }
    };

    StatisticsDigest {
        total_award_amount,
        award_count,
        average_award,
        top_agencies: distinct_values(records, "awarding_toptier_agency_name", 5),
        naics_codes: distinct_values(records, "NAICS Code", 10),
    }
}

/// Extracts up to `max` distinct non-empty values of `key`, preserving
/// first-seen order.
#[must_use]
pub fn distinct_values(records: &[AwardRecord], key: &str, max: usize) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        let value = record_str(record, key);
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
            if seen.len() == max {
                break;
            }
        }
    }
    seen
}

/// Direction of a spending trend between the first and last time buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Last bucket exceeds the first by more than 10%.
    Increasing,
    /// Last bucket is more than 10% below the first.
    Decreasing,
    /// Within the ±10% band, or fewer than two buckets.
    Stable,
}

/// Classifies the trend by comparing the first and last grouped points.
///
/// Intermediate points are ignored; fewer than two points is always
/// [`TrendDirection::Stable`].
#[must_use]
pub fn classify_trend(points: &[TrendPoint]) -> TrendDirection {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return TrendDirection::Stable;
    };
    if points.len() < 2 {
        return TrendDirection::Stable;
    }
    if last.aggregated_amount > first.aggregated_amount * 1.1 {
        TrendDirection::Increasing
    } else if last.aggregated_amount < first.aggregated_amount * 0.9 {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn award(name: &str, uei: &str, amount: f64, id: &str) -> AwardRecord {
        let value = json!({
            "Recipient Name": name,
            "Recipient UEI": uei,
            "Award Amount": amount,
            "Award ID": id,
        });
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn point(period: &str, amount: f64) -> TrendPoint {
        TrendPoint {
            time_period: json!({ "fiscal_year": period }),
            aggregated_amount: amount,
        }
    }

    #[test]
    fn rollup_groups_by_recipient_name() {
        let records = vec![
            award("ACME", "UEI1", 100.0, "A-1"),
            award("BETA", "UEI2", 300.0, "B-1"),
            award("ACME", "UEI1", 50.0, "A-2"),
        ];
        let rollups = rollup_recipients(&records, 20);
        assert_eq!(rollups.len(), 2);
        let top = rollups.first().unwrap();
        assert_eq!(top.name, "BETA");
        assert_eq!(top.total_amount, 300.0);
        let acme = rollups.get(1).unwrap();
        assert_eq!(acme.total_amount, 150.0);
        assert_eq!(acme.award_count, 2);
        assert_eq!(acme.award_ids, vec!["A-1".to_string(), "A-2".to_string()]);
    }

    #[test]
    fn rollup_totals_are_order_independent() {
        let forward = vec![
            award("ACME", "UEI1", 100.0, "A-1"),
            award("BETA", "UEI2", 300.0, "B-1"),
            award("ACME", "UEI1", 50.0, "A-2"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = rollup_recipients(&forward, 20);
        let b = rollup_recipients(&reversed, 20);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.total_amount, y.total_amount);
            assert_eq!(x.award_count, y.award_count);
        }
    }

    #[test]
    fn rollup_defaults_missing_name_to_unknown() {
        let value = json!({ "Award Amount": 42.0 });
        let serde_json::Value::Object(record) = value else {
            panic!("expected object");
        };
        let rollups = rollup_recipients(&[record], 20);
        assert_eq!(rollups.first().map(|r| r.name.as_str()), Some("Unknown"));
    }

    #[test]
    fn market_size_covers_truncated_set_only() {
        let records = vec![
            award("ACME", "UEI1", 500.0, "A-1"),
            award("BETA", "UEI2", 300.0, "B-1"),
            award("GAMMA", "UEI3", 100.0, "C-1"),
        ];
        let top_two = rollup_recipients(&records, 2);
        assert_eq!(market_size(&top_two), 800.0);
        let all = rollup_recipients(&records, 20);
        assert_eq!(market_size(&all), 900.0);
    }

    #[test]
    fn digest_average_handles_empty_page() {
        let digest = statistics_digest(&[]);
        assert_eq!(digest.award_count, 0);
        assert_eq!(digest.average_award, 0.0);
        assert!(digest.top_agencies.is_empty());
    }

    #[test]
    fn digest_average_over_three_awards() {
        let records = vec![
            award("ACME", "UEI1", 100.0, "A-1"),
            award("ACME", "UEI1", 200.0, "A-2"),
            award("ACME", "UEI1", 300.0, "A-3"),
        ];
        let digest = statistics_digest(&records);
        assert_eq!(digest.total_award_amount, 600.0);
        assert_eq!(digest.average_award, 200.0);
    }

    #[test]
    fn distinct_values_skips_empty_and_caps() {
        let values: Vec<AwardRecord> = ["DoD", "", "NASA", "DoD", "DOE"]
            .iter()
            .map(|agency| {
                let value = json!({ "awarding_toptier_agency_name": agency });
                match value {
                    serde_json::Value::Object(map) => map,
                    _ => unreachable!(),
                }
            })
            .collect();
        assert_eq!(
            distinct_values(&values, "awarding_toptier_agency_name", 2),
            vec!["DoD".to_string(), "NASA".to_string()]
        );
    }

    #[test]
    fn trend_thresholds() {
        assert_eq!(
            classify_trend(&[point("2022", 100.0), point("2023", 111.0)]),
            TrendDirection::Increasing
        );
        assert_eq!(
            classify_trend(&[point("2022", 100.0), point("2023", 89.0)]),
            TrendDirection::Decreasing
        );
        assert_eq!(
            classify_trend(&[point("2022", 100.0), point("2023", 100.0)]),
            TrendDirection::Stable
        );
        assert_eq!(
            classify_trend(&[point("2022", 100.0), point("2023", 110.0)]),
            TrendDirection::Stable
        );
    }

    #[test]
    fn trend_needs_two_points() {
        assert_eq!(classify_trend(&[]), TrendDirection::Stable);
        assert_eq!(
            classify_trend(&[point("2022", 100.0)]),
            TrendDirection::Stable
        );
    }

    #[test]
    fn trend_ignores_intermediate_points() {
        let points = vec![
            point("2021", 100.0),
            point("2022", 5_000.0),
            point("2023", 105.0),
        ];
        assert_eq!(classify_trend(&points), TrendDirection::Stable);
    }
}
