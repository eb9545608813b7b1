//! Portfolio domain — balance, holdings, profit/loss summary.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One held coin with its cost basis and unrealized P&L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub coin_id: CoinId,
    pub quantity: Decimal,
    pub average_buy_cost: Decimal,
    pub current_price: Decimal,
    pub net_profit: Decimal,
}

impl Holding {
    /// Current market value of this position.
    pub fn market_value(&self) -> Decimal {
        self.quantity * self.current_price
    }
}

/// Account-wide P&L totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_market_value: Decimal,
    pub total_buy_cost: Decimal,
    pub total_net_profit: Decimal,
    /// Percent, against total buy cost; 0 when nothing was ever bought.
    pub total_return_rate: Decimal,
}

/// A user's validated portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub balance: Decimal,
    pub holdings: Vec<Holding>,
    pub summary: PortfolioSummary,
}

impl Portfolio {
    pub fn holding(&self, coin_id: &CoinId) -> Option<&Holding> {
        self.holdings.iter().find(|h| &h.coin_id == coin_id)
    }

    /// Quantity held of one coin; zero when the coin is not in the portfolio.
    pub fn quantity_of(&self, coin_id: &CoinId) -> Decimal {
        self.holding(coin_id)
            .map(|h| h.quantity)
            .unwrap_or(Decimal::ZERO)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    NonPositiveQuantity { coin_id: String, quantity: String },
    NegativeBalance(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveQuantity { coin_id, quantity } => {
                write!(f, "Holding {} has non-positive quantity {}", coin_id, quantity)
            }
            ValidationError::NegativeBalance(b) => write!(f, "Negative balance {}", b),
        }
    }
}

impl std::error::Error for ValidationError {}
