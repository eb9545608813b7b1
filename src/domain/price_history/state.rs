//! Price history state container — app-owned, SDK-provided update logic.

use crate::chart::PriceSample;
use crate::shared::{CoinId, Range};
use std::collections::HashMap;

/// Fetched price history per coin + range.
///
/// The app owns instances of this type. A snapshot fully replaces whatever
/// was stored for its key — view changes refetch rather than patch, and
/// nothing is shared across ranges.
#[derive(Debug, Clone, Default)]
pub struct PriceHistoryState {
    data: HashMap<(CoinId, Range), Vec<PriceSample>>,
}

impl PriceHistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fetched snapshot (replaces all data for this key).
    pub fn apply_snapshot(&mut self, coin_id: CoinId, range: Range, samples: Vec<PriceSample>) {
        self.data.insert((coin_id, range), samples);
    }

    pub fn get(&self, coin_id: &CoinId, range: Range) -> Option<&Vec<PriceSample>> {
        self.data.get(&(coin_id.clone(), range))
    }

    /// Drop everything stored for one coin, all ranges.
    pub fn remove_coin(&mut self, coin_id: &CoinId) {
        self.data.retain(|(c, _), _| c != coin_id);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
