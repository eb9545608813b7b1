//! Watchlist sub-client — list, follow, unfollow.

use crate::client::CoinSimClient;
use crate::domain::watchlist::Watchlist;
use crate::error::SdkError;
use crate::shared::CoinId;

/// Sub-client for follow-list operations.
pub struct WatchlistOps<'a> {
    pub(crate) client: &'a CoinSimClient,
}

impl<'a> WatchlistOps<'a> {
    /// The user's followed coins plus the coins still available to follow.
    pub async fn list(&self) -> Result<Watchlist, SdkError> {
        Ok(self.client.http.get_follow_list().await?.into())
    }

    /// Start following a coin. Idempotent on the backend.
    pub async fn add(&self, coin_id: &CoinId) -> Result<(), SdkError> {
        self.client.http.post_follow_action("add", coin_id).await?;
        Ok(())
    }

    /// Stop following a coin.
    pub async fn remove(&self, coin_id: &CoinId) -> Result<(), SdkError> {
        self.client.http.post_follow_action("remove", coin_id).await?;
        Ok(())
    }
}
