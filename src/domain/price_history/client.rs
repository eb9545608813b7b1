//! History sub-client — fetch + order normalization.

use crate::chart::PriceSample;
use crate::client::CoinSimClient;
use crate::domain::price_history::{samples_from_rows, wire::PricePointRow};
use crate::error::SdkError;
use crate::shared::{CoinId, Range};
use chrono::{DateTime, NaiveDateTime};

/// Sub-client for price history operations.
pub struct History<'a> {
    pub(crate) client: &'a CoinSimClient,
}

impl<'a> History<'a> {
    /// Fetch a coin's price history over a range, oldest sample first.
    ///
    /// Malformed rows are dropped; ordering is normalized here so consumers
    /// never re-sort (the deployed backend serves newest-first).
    pub async fn get(&self, coin_id: &CoinId, range: Range) -> Result<Vec<PriceSample>, SdkError> {
        let rows = self.client.http.get_price_history(coin_id, range).await?;
        Ok(normalize_oldest_first(rows))
    }
}

/// Order rows oldest→newest: sort by parsed timestamps when every row's
/// label parses, otherwise assume the backend's newest-first order and
/// reverse.
pub(crate) fn normalize_oldest_first(rows: Vec<PricePointRow>) -> Vec<PriceSample> {
    let all_parse = !rows.is_empty()
        && rows
            .iter()
            .all(|r| r.label.as_deref().and_then(parse_label).is_some());

    if !all_parse {
        let mut samples = samples_from_rows(rows);
        samples.reverse();
        return samples;
    }

    let mut keyed: Vec<(NaiveDateTime, PricePointRow)> = rows
        .into_iter()
        .filter_map(|row| {
            row.label
                .as_deref()
                .and_then(parse_label)
                .map(|ts| (ts, row))
        })
        .collect();
    keyed.sort_by_key(|(ts, _)| *ts);
    samples_from_rows(keyed.into_iter().map(|(_, row)| row).collect())
}

/// Parse the row timestamp in the formats the backend has been seen to emit.
fn parse_label(label: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(label, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(label) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(label) {
        return Some(dt.naive_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: Option<&str>, price: f64) -> PricePointRow {
        PricePointRow {
            label: label.map(|s| s.to_string()),
            price: Some(price),
        }
    }

    #[test]
    fn test_sorts_by_parseable_timestamps() {
        let rows = vec![
            row(Some("2025-08-03 10:00:00"), 3.0),
            row(Some("2025-08-01 10:00:00"), 1.0),
            row(Some("2025-08-02 10:00:00"), 2.0),
        ];
        let samples = normalize_oldest_first(rows);
        let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rfc2822_labels_sort() {
        let rows = vec![
            row(Some("Tue, 05 Aug 2025 12:00:00 GMT"), 2.0),
            row(Some("Mon, 04 Aug 2025 12:00:00 GMT"), 1.0),
        ];
        let samples = normalize_oldest_first(rows);
        assert_eq!(samples[0].price, 1.0);
        assert_eq!(samples[1].price, 2.0);
    }

    #[test]
    fn test_unlabeled_rows_reverse_newest_first_payload() {
        let rows = vec![row(None, 9.0), row(None, 8.0), row(None, 7.0)];
        let samples = normalize_oldest_first(rows);
        let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_mixed_labels_fall_back_to_reverse() {
        let rows = vec![
            row(Some("2025-08-03 10:00:00"), 3.0),
            row(Some("???"), 2.0),
            row(None, 1.0),
        ];
        let samples = normalize_oldest_first(rows);
        let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_payload() {
        assert!(normalize_oldest_first(Vec::new()).is_empty());
    }

    #[test]
    fn test_malformed_prices_dropped_before_ordering() {
        let rows = vec![
            PricePointRow {
                label: None,
                price: None,
            },
            row(None, 5.0),
        ];
        let samples = normalize_oldest_first(rows);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].price, 5.0);
    }
}
