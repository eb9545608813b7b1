//! Wire types for trade endpoints (REST).

use crate::shared::{CoinId, TradeAction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /api/trade_info` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeInfoResponse {
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub coin_price: Option<Decimal>,
}

/// `POST /api/trade` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeRequest {
    pub coin_id: CoinId,
    pub action: TradeAction,
    pub quantity: Decimal,
}

/// `POST /api/trade` success response. Buy and sell populate different
/// fields; the conversion to [`crate::domain::trade::TradeReceipt`] keeps
/// only what the action reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeReceiptResponse {
    pub status: String,
    #[serde(default)]
    pub action: Option<TradeAction>,
    #[serde(default)]
    pub new_balance: Option<Decimal>,
    #[serde(default)]
    pub transaction_fee: Option<Decimal>,
    #[serde(default)]
    pub total_cost: Option<Decimal>,
    #[serde(default)]
    pub net_income: Option<Decimal>,
    #[serde(default)]
    pub gross_income: Option<Decimal>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Rejection body the backend sends with HTTP 400
/// (`{"status":"fail","reason":...}` or `{"error":...}`).
#[derive(Debug, Clone, Deserialize)]
pub struct TradeRejection {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TradeRejection {
    /// Human-readable rejection reason, whichever field carried it.
    pub fn message(self) -> Option<String> {
        self.reason.or(self.error)
    }
}
