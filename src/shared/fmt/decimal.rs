//! Money formatting for `rust_decimal::Decimal` amounts.
//!
//! Balances, costs, and P&L are always shown with two decimal places and
//! thousands separators (`5000000` → `"5,000,000.00"`), the convention the
//! game uses everywhere it prints USD.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a money amount: two decimals, comma-grouped integer part.
pub fn money(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };

    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}
