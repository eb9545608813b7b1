//! Market domain — tradable coins and current quotes.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tradable coin in the simulated market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub name: String,
}

impl From<wire::CoinListEntry> for Coin {
    fn from(entry: wire::CoinListEntry) -> Self {
        Self {
            id: entry.coin_id,
            name: entry.coin_name,
        }
    }
}

/// A coin's current market price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: CoinId,
    pub price: Decimal,
}

impl From<wire::QuoteEntry> for Quote {
    fn from(entry: wire::QuoteEntry) -> Self {
        Self {
            id: entry.coin_id,
            price: entry.price,
        }
    }
}
