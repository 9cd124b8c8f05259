//! Binance REST API endpoint constants.
//!
//! Paths are relative to the base URL of the host they are served from.

/// Base URL for the primary Binance REST API.
pub const BINANCE_API_URL: &str = "https://api.binance.com/api/";

/// Base URL for the secondary ("sapi") Binance REST API.
pub const BINANCE_SAPI_URL: &str = "https://api.binance.com/sapi/";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Public endpoints (no signature required).
pub mod public {
    /// Get system status (secondary host).
    pub const SYSTEM_STATUS: &str = "v1/system/status";
    /// Get server time.
    pub const TIME: &str = "v3/time";
    /// Get exchange trading rules and symbol information.
    pub const EXCHANGE_INFO: &str = "v3/exchangeInfo";
    /// Get recent trades.
    pub const TRADES: &str = "v3/trades";
    /// Get current average price.
    pub const AVG_PRICE: &str = "v3/avgPrice";
    /// Get 24hr ticker price change statistics.
    pub const TICKER_24HR: &str = "v3/ticker/24hr";
}

/// Private endpoints (`USER_DATA`, signed).
pub mod private {
    /// Get account information.
    pub const ACCOUNT: &str = "v3/account";
    /// Get all orders.
    pub const ALL_ORDERS: &str = "v3/allOrders";
    /// Get open orders.
    pub const OPEN_ORDERS: &str = "v3/openOrders";
    /// Get account trade list.
    pub const MY_TRADES: &str = "v3/myTrades";
    /// Query order.
    pub const ORDER: &str = "v3/order";
    /// Get all coins' information (secondary host).
    pub const CAPITAL_CONFIG: &str = "v1/capital/config/getall";
    /// Get deposit history (secondary host).
    pub const DEPOSIT_HISTORY: &str = "v1/capital/deposit/hisrec";
    /// Get withdraw history (secondary host).
    pub const WITHDRAW_HISTORY: &str = "v1/capital/withdraw/history";
}

/// Endpoints that must not receive `timestamp` / `recvWindow`.
pub const TIMESTAMP_EXEMPT: &[&str] = &[
    public::SYSTEM_STATUS,
    public::TIME,
    public::EXCHANGE_INFO,
    public::TRADES,
    public::AVG_PRICE,
    public::TICKER_24HR,
];

/// Endpoints served from the secondary host.
pub const SECONDARY_HOST: &[&str] = &[
    public::SYSTEM_STATUS,
    private::CAPITAL_CONFIG,
    private::DEPOSIT_HISTORY,
    private::WITHDRAW_HISTORY,
];

/// Which configured base URL a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Host {
    /// The primary REST API.
    #[default]
    Primary,
    /// The secondary ("sapi") REST API.
    Secondary,
}

impl Host {
    /// The host an endpoint is served from.
    pub fn for_endpoint(endpoint: &str) -> Self {
        if SECONDARY_HOST.contains(&endpoint) {
            Self::Secondary
        } else {
            Self::Primary
        }
    }
}

/// Whether an endpoint needs `timestamp` and `recvWindow` parameters.
pub fn requires_timestamp(endpoint: &str) -> bool {
    !TIMESTAMP_EXEMPT.contains(&endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exempt_endpoints() {
        for endpoint in TIMESTAMP_EXEMPT {
            assert!(!requires_timestamp(endpoint), "{endpoint}");
        }
        for endpoint in [
            private::ACCOUNT,
            private::ALL_ORDERS,
            private::OPEN_ORDERS,
            private::MY_TRADES,
            private::ORDER,
            private::CAPITAL_CONFIG,
            private::DEPOSIT_HISTORY,
            private::WITHDRAW_HISTORY,
            "v3/depth",
        ] {
            assert!(requires_timestamp(endpoint), "{endpoint}");
        }
    }

    #[test]
    fn test_host_routing() {
        assert_eq!(Host::for_endpoint(public::SYSTEM_STATUS), Host::Secondary);
        assert_eq!(Host::for_endpoint(private::DEPOSIT_HISTORY), Host::Secondary);
        assert_eq!(Host::for_endpoint(public::TRADES), Host::Primary);
        assert_eq!(Host::for_endpoint(private::ACCOUNT), Host::Primary);
    }
}
