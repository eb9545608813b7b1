//! Positions sub-client — portfolio + P&L fetch.

use crate::client::CoinSimClient;
use crate::domain::portfolio::{self, Portfolio};
use crate::error::SdkError;

/// Sub-client for portfolio operations.
pub struct Positions<'a> {
    pub(crate) client: &'a CoinSimClient,
}

impl<'a> Positions<'a> {
    /// Fetch the current portfolio snapshot: cash balance, open holdings,
    /// and the account-wide P&L summary.
    pub async fn profit(&self) -> Result<Portfolio, SdkError> {
        let resp = self.client.http.get_profit().await?;
        resp.try_into()
            .map_err(|e: portfolio::ValidationError| SdkError::Validation(e.to_string()))
    }
}
