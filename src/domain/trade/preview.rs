//! Pure trade preview math: gross amount, fee, and net cash movement.
//!
//! All math uses `rust_decimal::Decimal`. No async, no network calls — this
//! mirrors exactly what the backend will charge, so a UI can show the full
//! cost breakdown (and block an unaffordable buy) before submitting.

use crate::shared::TradeAction;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Transaction fee rate charged on every trade: 0.1% of the gross amount.
pub fn fee_rate() -> Decimal {
    Decimal::new(1, 3)
}

/// Full cost breakdown for a prospective trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradePreview {
    pub action: TradeAction,
    /// price × quantity, before the fee.
    pub gross: Decimal,
    /// 0.1% of gross.
    pub fee: Decimal,
    /// Buy: gross + fee (cash required). Sell: gross − fee (cash received).
    pub total: Decimal,
}

impl TradePreview {
    /// Whether a buy needs more cash than the account holds.
    /// Sells never fail on cash.
    pub fn exceeds(&self, balance: Decimal) -> bool {
        self.action == TradeAction::Buy && self.total > balance
    }

    /// How much cash is missing for this buy; zero when affordable.
    pub fn shortfall(&self, balance: Decimal) -> Decimal {
        if self.exceeds(balance) {
            self.total - balance
        } else {
            Decimal::ZERO
        }
    }
}

/// Errors for invalid preview inputs.
#[derive(Debug, Clone)]
pub enum PreviewError {
    NonPositivePrice(String),
    NonPositiveQuantity(String),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::NonPositivePrice(v) => write!(f, "Price must be positive, got {}", v),
            PreviewError::NonPositiveQuantity(v) => {
                write!(f, "Quantity must be positive, got {}", v)
            }
        }
    }
}

impl std::error::Error for PreviewError {}

/// Compute the cost breakdown the backend will apply to this trade.
pub fn preview(
    action: TradeAction,
    price: Decimal,
    quantity: Decimal,
) -> Result<TradePreview, PreviewError> {
    if price <= Decimal::ZERO {
        return Err(PreviewError::NonPositivePrice(price.to_string()));
    }
    if quantity <= Decimal::ZERO {
        return Err(PreviewError::NonPositiveQuantity(quantity.to_string()));
    }

    let gross = price * quantity;
    let fee = gross * fee_rate();
    let total = match action {
        TradeAction::Buy => gross + fee,
        TradeAction::Sell => gross - fee,
    };

    Ok(TradePreview {
        action,
        gross,
        fee,
        total,
    })
}

/// Quantity purchasable for a target cash amount, rounded to 6 decimals
/// (the precision the quantity field accepts).
pub fn quantity_for_total(total: Decimal, price: Decimal) -> Option<Decimal> {
    if price <= Decimal::ZERO {
        return None;
    }
    Some((total / price).round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero))
}

/// Gross cash amount for a quantity, rounded to cents.
pub fn total_for_quantity(quantity: Decimal, price: Decimal) -> Decimal {
    (quantity * price).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
