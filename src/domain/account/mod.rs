//! Account domain — simulated cash account lifecycle.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use rust_decimal::Decimal;

/// The cash balance every account starts (and restarts) with: 5,000,000 USD.
pub fn initial_balance() -> Decimal {
    Decimal::from(5_000_000u64)
}
