//! Watchlist domain — the coins a user follows.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::market::Coin;
use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A followed coin with its current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedCoin {
    pub id: CoinId,
    pub name: String,
    pub price: Decimal,
}

/// The user's follow list plus the coins still available to follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    pub tracked: Vec<TrackedCoin>,
    pub untracked: Vec<Coin>,
}

impl Watchlist {
    pub fn is_tracked(&self, coin_id: &CoinId) -> bool {
        self.tracked.iter().any(|c| &c.id == coin_id)
    }
}

impl From<wire::FollowListResponse> for Watchlist {
    fn from(resp: wire::FollowListResponse) -> Self {
        Self {
            tracked: resp
                .tracked
                .into_iter()
                .map(|row| TrackedCoin {
                    id: row.coin_id,
                    name: row.coin_name,
                    price: row.price,
                })
                .collect(),
            untracked: resp.untracked.into_iter().map(Coin::from).collect(),
        }
    }
}
