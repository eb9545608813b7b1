//! Account sub-client — reset the simulated account.

use crate::client::CoinSimClient;
use crate::domain::account::initial_balance;
use crate::error::SdkError;
use rust_decimal::Decimal;

/// Sub-client for account operations.
pub struct Account<'a> {
    pub(crate) client: &'a CoinSimClient,
}

impl<'a> Account<'a> {
    /// Wipe all trades and restore the starting balance. Returns the new
    /// balance (the documented initial balance when the backend omits it).
    pub async fn reset(&self) -> Result<Decimal, SdkError> {
        let resp = self.client.http.reset_account().await?;

        if let Some(error) = resp.error {
            return Err(SdkError::Other(error));
        }

        Ok(resp.balance.unwrap_or_else(initial_balance))
    }
}
