//! Price history domain — raw backend rows → ordered chart samples.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

pub use state::PriceHistoryState;

use crate::chart::PriceSample;

impl From<wire::PricePointRow> for PriceSample {
    fn from(row: wire::PricePointRow) -> Self {
        Self {
            label: row.label,
            // rows that failed lenient decoding carry no price; NaN marks
            // them for exclusion by the chart transform
            price: row.price.unwrap_or(f64::NAN),
        }
    }
}

/// Convert backend rows to chart samples, dropping malformed rows.
pub fn samples_from_rows(rows: Vec<wire::PricePointRow>) -> Vec<PriceSample> {
    rows.into_iter()
        .filter(|row| row.price.is_some())
        .map(PriceSample::from)
        .collect()
}
