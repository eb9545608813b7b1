//! Wire types for market responses (REST).

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of `GET /api/coin_list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinListEntry {
    pub coin_id: CoinId,
    pub coin_name: String,
}

/// One row of `GET /api/current_prices`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteEntry {
    pub coin_id: CoinId,
    pub price: Decimal,
}
