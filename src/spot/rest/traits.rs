//! Trait definition for the Binance REST API client.
//!
//! This module provides the `BinanceClient` trait which abstracts the
//! endpoint methods. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., logging or caching wrappers)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use binance_api_client::spot::rest::{BinanceClient, SpotRestClient};
//!
//! async fn check_status<C: BinanceClient>(client: &C) -> Result<(), binance_api_client::BinanceError> {
//!     let status = client.get_system_status().await?;
//!     println!("System status: {}", status.msg);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::BinanceError;
use crate::spot::rest::private::{AccountInfo, AccountTrade, Order};
use crate::spot::rest::public::{AveragePrice, RecentTrade, ServerTime, SystemStatus};

/// Trait defining the Binance REST API operations.
///
/// All methods are async and return `Result<T, BinanceError>`.
pub trait BinanceClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the system status.
    fn get_system_status(&self) -> impl Future<Output = Result<SystemStatus, BinanceError>> + Send;

    /// Get the server time.
    fn get_server_time(&self) -> impl Future<Output = Result<ServerTime, BinanceError>> + Send;

    /// Get exchange trading rules and symbol information.
    fn get_exchange_info(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get recent trades for a symbol.
    fn get_order_book(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Vec<RecentTrade>, BinanceError>> + Send;

    /// Get the current average price.
    fn get_avg_price(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<AveragePrice, BinanceError>> + Send;

    /// Get 24hr ticker statistics.
    fn get_ticker(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    // ========== Private Endpoints ==========

    /// Get current account information.
    fn get_account_info(&self) -> impl Future<Output = Result<AccountInfo, BinanceError>> + Send;

    /// Get all account orders.
    fn get_all_orders(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Order>, BinanceError>> + Send;

    /// Get open orders.
    fn get_open_orders(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Order>, BinanceError>> + Send;

    /// Get the account's trade history.
    fn get_trades(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Vec<AccountTrade>, BinanceError>> + Send;

    /// Get an order's status.
    fn get_order_status(
        &self,
        symbol: Option<&str>,
        order_id: Option<u64>,
    ) -> impl Future<Output = Result<Order, BinanceError>> + Send;

    /// Get coin information for deposit and withdraw.
    fn get_user_coins_info(&self) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get deposit history.
    fn get_deposit_history(&self) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get withdraw history.
    fn get_withdraw_history(&self) -> impl Future<Output = Result<Value, BinanceError>> + Send;
}
