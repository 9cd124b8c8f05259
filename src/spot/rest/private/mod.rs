//! Signed REST API endpoints (`USER_DATA`).
//!
//! These endpoints require API credentials to be configured on the client.
//! Calls without usable credentials fail with
//! [`BinanceError::MissingCredentials`] or [`BinanceError::Auth`] before any
//! request is sent.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BinanceError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::private;
use crate::spot::rest::public::symbol_param;
use crate::spot::rest::query::QueryParams;

impl SpotRestClient {
    /// Get current account information.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::spot::rest::SpotRestClient;
    /// use binance_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = SpotRestClient::builder().credentials(credentials).build();
    ///
    ///     let account = client.get_account_info().await?;
    ///     for balance in account.balances {
    ///         println!("{}: {} ({} locked)", balance.asset, balance.free, balance.locked);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_info(&self) -> Result<AccountInfo, BinanceError> {
        self.signed_get(private::ACCOUNT, QueryParams::new()).await
    }

    /// Get all account orders; active, canceled, or filled.
    pub async fn get_all_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>, BinanceError> {
        self.signed_get(private::ALL_ORDERS, symbol_param(symbol))
            .await
    }

    /// Get open orders, on one symbol or on all of them.
    ///
    /// Omitting the symbol is expensive in request weight.
    pub async fn get_open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>, BinanceError> {
        self.signed_get(private::OPEN_ORDERS, symbol_param(symbol))
            .await
    }

    /// Get the account's trade history for a symbol.
    pub async fn get_trades(
        &self,
        symbol: Option<&str>,
    ) -> Result<Vec<AccountTrade>, BinanceError> {
        self.signed_get(private::MY_TRADES, symbol_param(symbol))
            .await
    }

    /// Get an order's status.
    pub async fn get_order_status(
        &self,
        symbol: Option<&str>,
        order_id: Option<u64>,
    ) -> Result<Order, BinanceError> {
        let params = symbol_param(symbol).with("orderId", order_id);
        self.signed_get(private::ORDER, params).await
    }

    /// Get information on coins available for deposit and withdraw.
    ///
    /// Served from the secondary host.
    pub async fn get_user_coins_info(&self) -> Result<Value, BinanceError> {
        self.signed_get(private::CAPITAL_CONFIG, QueryParams::new())
            .await
    }

    /// Get the account's deposit history.
    ///
    /// Served from the secondary host.
    pub async fn get_deposit_history(&self) -> Result<Value, BinanceError> {
        self.signed_get(private::DEPOSIT_HISTORY, QueryParams::new())
            .await
    }

    /// Get the account's withdraw history.
    ///
    /// Served from the secondary host.
    pub async fn get_withdraw_history(&self) -> Result<Value, BinanceError> {
        self.signed_get(private::WITHDRAW_HISTORY, QueryParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_info_parsing() {
        let info: AccountInfo = serde_json::from_str(
            r#"{"makerCommission":15,"takerCommission":15,"buyerCommission":0,"sellerCommission":0,
                "canTrade":true,"canWithdraw":true,"canDeposit":true,"updateTime":123456789,
                "accountType":"SPOT",
                "balances":[{"asset":"BTC","free":"4723846.89208129","locked":"0.00000000"}],
                "permissions":["SPOT"]}"#,
        )
        .unwrap();
        assert!(info.can_trade);
        assert_eq!(info.balances.len(), 1);
        assert_eq!(info.balances[0].asset, "BTC");
    }

    #[test]
    fn test_order_parsing() {
        let order: Order = serde_json::from_str(
            r#"{"symbol":"LTCBTC","orderId":1,"orderListId":-1,"clientOrderId":"myOrder1",
                "price":"0.1","origQty":"1.0","executedQty":"0.0","cummulativeQuoteQty":"0.0",
                "status":"NEW","timeInForce":"GTC","type":"LIMIT","side":"BUY","stopPrice":"0.0",
                "icebergQty":"0.0","time":1499827319559,"updateTime":1499827319559,"isWorking":true}"#,
        )
        .unwrap();
        assert_eq!(order.order_id, 1);
        assert_eq!(order.order_type, "LIMIT");
        assert_eq!(order.order_list_id, Some(-1));
    }

    #[test]
    fn test_order_status_params_skip_absent_order_id() {
        let params = symbol_param(Some("ltcbtc")).with("orderId", None::<u64>);
        assert_eq!(params.to_query_string(), "symbol=LTCBTC");
    }
}
