//! f64 formatting for chart annotations.
//!
//! Chart geometry is f64 end to end; these helpers produce the short labels
//! drawn next to a trend line (extrema tags, change badges). For balances and
//! other money amounts, use the `decimal` sibling module.

/// Format a price for a chart label with auto-detected decimal places.
///
/// Large prices drop the fraction entirely; sub-unit prices keep enough
/// digits to stay distinguishable from zero. Trailing zeros are trimmed.
pub fn price_label(price: f64) -> String {
    let abs = price.abs();

    if !abs.is_finite() {
        return "—".to_string();
    }

    let decimals = if abs >= 1000.0 {
        0
    } else if abs >= 1.0 || abs == 0.0 {
        2
    } else {
        let exponent = abs.log10().floor().abs() as usize;
        (exponent + 2).min(8)
    };

    let formatted = format!("{:.1$}", price, decimals);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Format a change percentage with an explicit sign, two decimals.
///
/// Positive values (and zero) get a leading `+`, matching how the trend
/// header renders gains.
pub fn signed_percent(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{:.2}%", percent)
    } else {
        format!("{:.2}%", percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label_large() {
        assert_eq!(price_label(68123.7), "68124");
        assert_eq!(price_label(1000.0), "1000");
    }

    #[test]
    fn test_price_label_medium() {
        assert_eq!(price_label(1.0), "1");
        assert_eq!(price_label(15.456), "15.46");
        assert_eq!(price_label(999.999), "1000");
    }

    #[test]
    fn test_price_label_small() {
        assert_eq!(price_label(0.1), "0.1");
        assert_eq!(price_label(0.0123), "0.0123");
        assert_eq!(price_label(0.000123), "0.000123");
    }

    #[test]
    fn test_price_label_zero_and_nonfinite() {
        assert_eq!(price_label(0.0), "0");
        assert_eq!(price_label(f64::NAN), "—");
        assert_eq!(price_label(f64::INFINITY), "—");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(50.0), "+50.00%");
        assert_eq!(signed_percent(0.0), "+0.00%");
        assert_eq!(signed_percent(-3.204), "-3.20%");
    }
}
