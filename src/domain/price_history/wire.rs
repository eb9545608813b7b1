//! Wire types for price history rows (REST).

use serde::{Deserialize, Serialize};

/// One row of `GET /api/price_history/{coin_id}`.
///
/// Row prices come from an external feed and are occasionally null or
/// non-numeric; those decode to `price: None` instead of failing the whole
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePointRow {
    #[serde(default, alias = "receiving_time", alias = "time")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_price::deserialize")]
    pub price: Option<f64>,
}

/// Deserializes a price that may arrive as a number, a numeric string, null,
/// or garbage — anything non-numeric becomes `None` rather than an error.
pub mod lenient_price {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }))
    }
}
