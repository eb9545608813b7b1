//! Wire types for follow-list responses (REST).

use crate::domain::market::wire::CoinListEntry;
use crate::shared::{CoinId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /follow_list` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowListResponse {
    #[serde(default)]
    pub tracked: Vec<TrackedRow>,
    #[serde(default)]
    pub untracked: Vec<CoinListEntry>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// One followed coin row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackedRow {
    pub coin_id: CoinId,
    pub coin_name: String,
    pub price: Decimal,
}
