//! Trade domain — fee preview math, trade info, execution receipts.

#[cfg(feature = "http")]
pub mod client;
pub mod preview;
pub mod wire;

pub use preview::{fee_rate, preview, PreviewError, TradePreview};

use crate::shared::TradeAction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance + live price snapshot taken before composing a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInfo {
    pub balance: Decimal,
    /// `None` when the requested coin has no current price.
    pub coin_price: Option<Decimal>,
}

/// A confirmed trade as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeReceipt {
    pub action: TradeAction,
    pub new_balance: Decimal,
    pub transaction_fee: Decimal,
    /// Buy only: amount debited (gross + fee).
    pub total_cost: Option<Decimal>,
    /// Sell only: proceeds before the fee.
    pub gross_income: Option<Decimal>,
    /// Sell only: amount credited (gross − fee).
    pub net_income: Option<Decimal>,
}

impl TradeReceipt {
    /// The cash amount that actually moved, signed from the account's view.
    pub fn cash_delta(&self) -> Decimal {
        match self.action {
            TradeAction::Buy => -self.total_cost.unwrap_or(Decimal::ZERO),
            TradeAction::Sell => self.net_income.unwrap_or(Decimal::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_cash_delta_buy_is_negative() {
        let receipt = TradeReceipt {
            action: TradeAction::Buy,
            new_balance: dec("4000"),
            transaction_fee: dec("1"),
            total_cost: Some(dec("1001")),
            gross_income: None,
            net_income: None,
        };
        assert_eq!(receipt.cash_delta(), dec("-1001"));
    }

    #[test]
    fn test_cash_delta_sell_is_net_income() {
        let receipt = TradeReceipt {
            action: TradeAction::Sell,
            new_balance: dec("6000"),
            transaction_fee: dec("1"),
            total_cost: None,
            gross_income: Some(dec("1000")),
            net_income: Some(dec("999")),
        };
        assert_eq!(receipt.cash_delta(), dec("999"));
    }
}
