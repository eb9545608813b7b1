//! Markets sub-client — coin list, quotes, cache.

use crate::client::CoinSimClient;
use crate::domain::market::{Coin, Quote};
use crate::error::SdkError;
use crate::shared::CoinId;
use std::time::Instant;

/// Sub-client for market operations.
pub struct Markets<'a> {
    pub(crate) client: &'a CoinSimClient,
}

impl<'a> Markets<'a> {
    /// Get the coin list. Uses TTL cache — the list changes rarely while
    /// every page needs it.
    pub async fn coins(&self) -> Result<Vec<Coin>, SdkError> {
        {
            let cache = self.client.coin_cache.read().await;
            if let Some((coins, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.coin_cache_ttl {
                    return Ok(coins.clone());
                }
            }
        }

        let coins: Vec<Coin> = self
            .client
            .http
            .get_coin_list()
            .await?
            .into_iter()
            .map(Coin::from)
            .collect();

        *self.client.coin_cache.write().await = Some((coins.clone(), Instant::now()));
        Ok(coins)
    }

    /// Get current quotes for every coin. Never cached — quotes move.
    pub async fn quotes(&self) -> Result<Vec<Quote>, SdkError> {
        Ok(self
            .client
            .http
            .get_current_prices()
            .await?
            .into_iter()
            .map(Quote::from)
            .collect())
    }

    /// Current quote for one coin, if it trades.
    pub async fn quote(&self, coin_id: &CoinId) -> Result<Option<Quote>, SdkError> {
        Ok(self.quotes().await?.into_iter().find(|q| &q.id == coin_id))
    }

    /// Drop the cached coin list.
    pub async fn clear_cache(&self) {
        *self.client.coin_cache.write().await = None;
    }
}
