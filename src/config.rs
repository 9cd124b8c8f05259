//! Client configuration.
//!
//! Configuration is passed explicitly to the client; nothing is read from
//! global state behind the caller's back.

use crate::spot::rest::endpoints::{BINANCE_API_URL, BINANCE_SAPI_URL};

/// Receive window applied when none (or a non-positive one) is configured.
pub const DEFAULT_RECV_WINDOW_MS: i64 = 10_000;

/// Hosts and timing settings for a client instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the primary REST API (`/api/`).
    pub primary_base_url: String,
    /// Base URL of the secondary REST API (`/sapi/`).
    pub secondary_base_url: String,
    /// Receive window in milliseconds.
    pub recv_window_ms: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            primary_base_url: BINANCE_API_URL.to_string(),
            secondary_base_url: BINANCE_SAPI_URL.to_string(),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
        }
    }
}

impl ClientConfig {
    /// Environment variable overriding the primary base URL.
    pub const API_URL_VAR: &'static str = "BINANCE_API_URL";
    /// Environment variable overriding the secondary base URL.
    pub const SAPI_URL_VAR: &'static str = "BINANCE_SAPI_URL";
    /// Environment variable overriding the receive window.
    pub const RECV_WINDOW_VAR: &'static str = "BINANCE_RECV_WINDOW";

    /// Build a configuration from environment variables.
    ///
    /// Unset, empty or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            primary_base_url: non_empty(Self::API_URL_VAR).unwrap_or(defaults.primary_base_url),
            secondary_base_url: non_empty(Self::SAPI_URL_VAR)
                .unwrap_or(defaults.secondary_base_url),
            recv_window_ms: non_empty(Self::RECV_WINDOW_VAR)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.recv_window_ms),
        }
    }

    /// The receive window actually sent, substituting the default for non-positive values.
    pub fn effective_recv_window(&self) -> i64 {
        if self.recv_window_ms > 0 {
            self.recv_window_ms
        } else {
            DEFAULT_RECV_WINDOW_MS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.primary_base_url, "https://api.binance.com/api/");
        assert_eq!(config.secondary_base_url, "https://api.binance.com/sapi/");
        assert_eq!(config.effective_recv_window(), 10_000);
    }

    #[test]
    fn test_non_positive_recv_window_uses_default() {
        for window in [0, -1, -5000] {
            let config = ClientConfig {
                recv_window_ms: window,
                ..ClientConfig::default()
            };
            assert_eq!(config.effective_recv_window(), DEFAULT_RECV_WINDOW_MS);
        }

        let config = ClientConfig {
            recv_window_ms: 5000,
            ..ClientConfig::default()
        };
        assert_eq!(config.effective_recv_window(), 5000);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("BINANCE_API_URL", "https://testnet.binance.vision/api/"),
            ("BINANCE_SAPI_URL", ""),
            ("BINANCE_RECV_WINDOW", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.primary_base_url, "https://testnet.binance.vision/api/");
        assert_eq!(config.secondary_base_url, BINANCE_SAPI_URL);
        assert_eq!(config.recv_window_ms, DEFAULT_RECV_WINDOW_MS);
    }
}
