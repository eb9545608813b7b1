//! Display formatting for prices, balances, and percentage changes.

pub mod decimal;
pub mod num;

pub use decimal::money;
pub use num::{price_label, signed_percent};
