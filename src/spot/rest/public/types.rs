//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Server time response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Server time in milliseconds since UNIX epoch.
    pub server_time: i64,
}

/// System status response.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemStatus {
    /// 0 = normal, 1 = system maintenance.
    pub status: u8,
    /// "normal" or "system_maintenance".
    pub msg: String,
}

impl SystemStatus {
    /// Whether the exchange reports normal operation.
    pub fn is_normal(&self) -> bool {
        self.status == 0
    }
}

/// Current average price for a symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragePrice {
    /// Averaging interval in minutes.
    pub mins: u32,
    /// Average price.
    pub price: Decimal,
    /// Last trade time used for the average.
    #[serde(default)]
    pub close_time: Option<i64>,
}

/// A recent public trade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTrade {
    pub id: u64,
    pub price: Decimal,
    pub qty: Decimal,
    #[serde(default)]
    pub quote_qty: Option<Decimal>,
    pub time: i64,
    pub is_buyer_maker: bool,
    #[serde(default)]
    pub is_best_match: Option<bool>,
}
