//! Wire types for account responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `POST /api/reset` response — `message` on success, `error` on failure.
/// `balance` is optional; older backend builds omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub error: Option<String>,
}
