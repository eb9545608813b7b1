//! Trades sub-client — trade info, execution, rejection mapping.

use crate::client::CoinSimClient;
use crate::domain::trade::wire::{TradeReceiptResponse, TradeRejection, TradeRequest};
use crate::domain::trade::{TradeInfo, TradeReceipt};
use crate::error::{HttpError, SdkError};
use crate::shared::{CoinId, TradeAction};
use rust_decimal::Decimal;

/// Sub-client for trade operations.
pub struct Trades<'a> {
    pub(crate) client: &'a CoinSimClient,
}

impl<'a> Trades<'a> {
    /// Current balance plus the live price of one coin — the snapshot a
    /// trade form needs before composing an order.
    pub async fn info(&self, coin_id: &CoinId) -> Result<TradeInfo, SdkError> {
        let resp = self.client.http.get_trade_info(coin_id).await?;
        Ok(TradeInfo {
            balance: resp.balance,
            coin_price: resp.coin_price,
        })
    }

    /// Execute a simulated trade.
    ///
    /// Business rejections (insufficient balance, insufficient holdings,
    /// unknown coin) surface as [`SdkError::TradeRejected`] with the
    /// backend's reason; transport problems stay [`SdkError::Http`].
    pub async fn execute(
        &self,
        coin_id: &CoinId,
        action: TradeAction,
        quantity: Decimal,
    ) -> Result<TradeReceipt, SdkError> {
        let request = TradeRequest {
            coin_id: coin_id.clone(),
            action,
            quantity,
        };

        let resp = match self.client.http.submit_trade(&request).await {
            Ok(resp) => resp,
            Err(HttpError::BadRequest(body)) => {
                return Err(rejection_from_body(&body));
            }
            Err(e) => return Err(e.into()),
        };

        receipt_from_wire(action, resp)
    }
}

/// Map a 400 body to a typed rejection, falling back to the raw body.
fn rejection_from_body(body: &str) -> SdkError {
    let reason = serde_json::from_str::<TradeRejection>(body)
        .ok()
        .and_then(TradeRejection::message)
        .unwrap_or_else(|| body.to_string());
    SdkError::TradeRejected { reason }
}

fn receipt_from_wire(action: TradeAction, resp: TradeReceiptResponse) -> Result<TradeReceipt, SdkError> {
    if resp.status != "success" {
        return Err(SdkError::TradeRejected {
            reason: resp.reason.unwrap_or_else(|| resp.status.clone()),
        });
    }

    Ok(TradeReceipt {
        action: resp.action.unwrap_or(action),
        new_balance: resp.new_balance.unwrap_or(Decimal::ZERO),
        transaction_fee: resp.transaction_fee.unwrap_or(Decimal::ZERO),
        total_cost: resp.total_cost,
        gross_income: resp.gross_income,
        net_income: resp.net_income,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_buy_receipt_from_wire() {
        let resp: TradeReceiptResponse = serde_json::from_str(
            r#"{"status":"success","action":"buy","new_balance":4998998.5,
                "transaction_fee":1.0,"total_cost":1001.5}"#,
        )
        .unwrap();
        let receipt = receipt_from_wire(TradeAction::Buy, resp).unwrap();
        assert_eq!(receipt.action, TradeAction::Buy);
        assert_eq!(receipt.new_balance, dec("4998998.5"));
        assert_eq!(receipt.total_cost, Some(dec("1001.5")));
        assert!(receipt.net_income.is_none());
    }

    #[test]
    fn test_sell_receipt_from_wire() {
        let resp: TradeReceiptResponse = serde_json::from_str(
            r#"{"status":"success","action":"sell","new_balance":5000998.0,
                "transaction_fee":1.0,"net_income":999.0,"gross_income":1000.0}"#,
        )
        .unwrap();
        let receipt = receipt_from_wire(TradeAction::Sell, resp).unwrap();
        assert_eq!(receipt.cash_delta(), dec("999.0"));
    }

    #[test]
    fn test_fail_status_maps_to_rejection() {
        let resp: TradeReceiptResponse =
            serde_json::from_str(r#"{"status":"fail","reason":"insufficient holdings"}"#).unwrap();
        let err = receipt_from_wire(TradeAction::Sell, resp).unwrap_err();
        assert!(matches!(
            err,
            SdkError::TradeRejected { reason } if reason == "insufficient holdings"
        ));
    }

    #[test]
    fn test_rejection_from_structured_body() {
        let err = rejection_from_body(r#"{"status":"fail","reason":"balance too low"}"#);
        assert!(matches!(
            err,
            SdkError::TradeRejected { reason } if reason == "balance too low"
        ));
    }

    #[test]
    fn test_rejection_from_error_body() {
        let err = rejection_from_body(r#"{"error":"unknown coin"}"#);
        assert!(matches!(
            err,
            SdkError::TradeRejected { reason } if reason == "unknown coin"
        ));
    }

    #[test]
    fn test_rejection_from_opaque_body() {
        let err = rejection_from_body("<html>502</html>");
        assert!(matches!(
            err,
            SdkError::TradeRejected { reason } if reason == "<html>502</html>"
        ));
    }
}
