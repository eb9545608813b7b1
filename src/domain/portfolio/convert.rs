//! Wire → domain conversions with validation.

use super::wire::{HoldingRow, ProfitResponse, SummaryRow};
use super::{Holding, Portfolio, PortfolioSummary, ValidationError};
use rust_decimal::Decimal;

impl TryFrom<HoldingRow> for Holding {
    type Error = ValidationError;

    fn try_from(row: HoldingRow) -> Result<Self, Self::Error> {
        if row.quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQuantity {
                coin_id: row.coin_id.to_string(),
                quantity: row.quantity.to_string(),
            });
        }
        Ok(Holding {
            coin_id: row.coin_id,
            quantity: row.quantity,
            average_buy_cost: row.average_buy_cost,
            current_price: row.current_price,
            net_profit: row.net_profit,
        })
    }
}

impl From<SummaryRow> for PortfolioSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            total_market_value: row.total_market_value,
            total_buy_cost: row.total_buy_cost,
            total_net_profit: row.total_net_profit,
            total_return_rate: row.total_return_rate,
        }
    }
}

impl TryFrom<ProfitResponse> for Portfolio {
    type Error = ValidationError;

    fn try_from(resp: ProfitResponse) -> Result<Self, Self::Error> {
        if resp.balance < Decimal::ZERO {
            return Err(ValidationError::NegativeBalance(resp.balance.to_string()));
        }
        let holdings = resp
            .portfolio
            .into_iter()
            .map(Holding::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Portfolio {
            balance: resp.balance,
            holdings,
            summary: resp.summary.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CoinId;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn profit_json() -> ProfitResponse {
        serde_json::from_str(
            r#"{
                "balance": 4899000.25,
                "portfolio": [
                    {"coin_id": "BTC", "quantity": 1.5, "average_buy_cost": 60000.0,
                     "current_price": 65000.0, "net_profit": 7500.0}
                ],
                "summary": {
                    "total_market_value": 97500.0,
                    "total_buy_cost": 90000.0,
                    "total_net_profit": 7500.0,
                    "total_return_rate": 8.33
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_portfolio_converts() {
        let portfolio = Portfolio::try_from(profit_json()).unwrap();
        assert_eq!(portfolio.balance, dec("4899000.25"));
        assert_eq!(portfolio.holdings.len(), 1);
        let holding = portfolio.holding(&CoinId::from("BTC")).unwrap();
        assert_eq!(holding.market_value(), dec("97500.0"));
        assert_eq!(portfolio.summary.total_return_rate, dec("8.33"));
    }

    #[test]
    fn test_quantity_of_missing_coin_is_zero() {
        let portfolio = Portfolio::try_from(profit_json()).unwrap();
        assert_eq!(portfolio.quantity_of(&CoinId::from("DOGE")), Decimal::ZERO);
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut resp = profit_json();
        resp.portfolio[0].quantity = Decimal::ZERO;
        let err = Portfolio::try_from(resp).unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveQuantity { .. }));
    }

    #[test]
    fn test_negative_balance_rejected() {
        let mut resp = profit_json();
        resp.balance = dec("-1");
        let err = Portfolio::try_from(resp).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeBalance(_)));
    }

    #[test]
    fn test_missing_summary_defaults_to_zeros() {
        let resp: ProfitResponse = serde_json::from_str(r#"{"balance": 5000000}"#).unwrap();
        let portfolio = Portfolio::try_from(resp).unwrap();
        assert!(portfolio.holdings.is_empty());
        assert_eq!(portfolio.summary.total_net_profit, Decimal::ZERO);
    }
}
