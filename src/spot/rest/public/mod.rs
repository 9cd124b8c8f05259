//! Public REST API endpoints (no signature required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BinanceError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::public;
use crate::spot::rest::query::QueryParams;

/// Symbol parameter, upper-cased the way the exchange expects it.
pub(crate) fn symbol_param(symbol: Option<&str>) -> QueryParams {
    QueryParams::new().with(
        "symbol",
        symbol.filter(|s| !s.is_empty()).map(str::to_uppercase),
    )
}

impl SpotRestClient {
    /// Get the system status.
    ///
    /// Served from the secondary host.
    pub async fn get_system_status(&self) -> Result<SystemStatus, BinanceError> {
        self.public_get(public::SYSTEM_STATUS, QueryParams::new())
            .await
    }

    /// Get the server time.
    ///
    /// This is useful for checking clock drift against the receive window.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::spot::rest::SpotRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SpotRestClient::new();
    ///     let time = client.get_server_time().await?;
    ///     println!("Server time: {}", time.server_time);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_server_time(&self) -> Result<ServerTime, BinanceError> {
        self.public_get(public::TIME, QueryParams::new()).await
    }

    /// Get exchange trading rules and symbol information.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Restrict the result to one symbol.
    pub async fn get_exchange_info(&self, symbol: Option<&str>) -> Result<Value, BinanceError> {
        self.public_get(public::EXCHANGE_INFO, symbol_param(symbol))
            .await
    }

    /// Get recent trades for a symbol.
    pub async fn get_order_book(&self, symbol: &str) -> Result<Vec<RecentTrade>, BinanceError> {
        self.public_get(public::TRADES, symbol_param(Some(symbol)))
            .await
    }

    /// Get the current average price for a symbol.
    pub async fn get_avg_price(&self, symbol: Option<&str>) -> Result<AveragePrice, BinanceError> {
        self.public_get(public::AVG_PRICE, symbol_param(symbol))
            .await
    }

    /// Get 24hr ticker price change statistics.
    ///
    /// Without a symbol, tickers for all symbols are returned as an array.
    pub async fn get_ticker(&self, symbol: Option<&str>) -> Result<Value, BinanceError> {
        self.public_get(public::TICKER_24HR, symbol_param(symbol))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_param() {
        assert_eq!(symbol_param(Some("btcusdt")).to_query_string(), "symbol=BTCUSDT");
        assert_eq!(symbol_param(None).to_query_string(), "");
        assert_eq!(symbol_param(Some("")).to_query_string(), "");
    }

    #[test]
    fn test_recent_trade_parsing() {
        let trade: RecentTrade = serde_json::from_str(
            r#"{"id":28457,"price":"4.00000100","qty":"12.00000000","quoteQty":"48.000012",
                "time":1499865549590,"isBuyerMaker":true,"isBestMatch":true}"#,
        )
        .unwrap();
        assert_eq!(trade.id, 28457);
        assert_eq!(trade.price.to_string(), "4.00000100");
        assert!(trade.is_buyer_maker);
    }

    #[test]
    fn test_system_status_parsing() {
        let status: SystemStatus = serde_json::from_str(r#"{"status":0,"msg":"normal"}"#).unwrap();
        assert!(status.is_normal());
    }
}
