//! Wire types for profit/balance responses (REST).

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /api/profit` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitResponse {
    pub balance: Decimal,
    #[serde(default)]
    pub portfolio: Vec<HoldingRow>,
    #[serde(default)]
    pub summary: SummaryRow,
}

/// One open position row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoldingRow {
    pub coin_id: CoinId,
    pub quantity: Decimal,
    pub average_buy_cost: Decimal,
    pub current_price: Decimal,
    pub net_profit: Decimal,
}

/// Account-wide totals row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SummaryRow {
    #[serde(default)]
    pub total_market_value: Decimal,
    #[serde(default)]
    pub total_buy_cost: Decimal,
    #[serde(default)]
    pub total_net_profit: Decimal,
    #[serde(default)]
    pub total_return_rate: Decimal,
}
