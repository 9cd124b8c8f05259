//! Per-call request description and options.

use std::time::Duration;

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::spot::rest::endpoints::{Host, requires_timestamp};
use crate::spot::rest::query::QueryParams;

/// Endpoint security type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityType {
    /// Public endpoint, sent unsigned.
    #[default]
    None,
    /// Account endpoint, signed with the API secret.
    UserData,
}

/// Everything the dispatcher needs to send one request.
///
/// Host and timestamp policy default to what the endpoint tables say and can
/// be overridden for endpoints the tables do not know about.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub endpoint: String,
    pub params: QueryParams,
    pub method: Method,
    pub security: SecurityType,
    pub requires_timestamp: bool,
    pub host: Host,
}

impl RequestSpec {
    /// Describe a request to `endpoint` using the endpoint tables' defaults.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            requires_timestamp: requires_timestamp(&endpoint),
            host: Host::for_endpoint(&endpoint),
            endpoint,
            params: QueryParams::new(),
            method,
            security: SecurityType::None,
        }
    }

    /// A public GET request.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// A public POST request.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// Mark the request as signed (`USER_DATA`).
    pub fn signed(mut self) -> Self {
        self.security = SecurityType::UserData;
        self
    }

    /// Set the query parameters.
    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Override the host.
    pub fn host(mut self, host: Host) -> Self {
        self.host = host;
        self
    }

    /// Override whether `timestamp` / `recvWindow` are added.
    pub fn requires_timestamp(mut self, required: bool) -> Self {
        self.requires_timestamp = required;
        self
    }

    /// Whether the request must be signed.
    pub fn is_signed(&self) -> bool {
        self.security == SecurityType::UserData
    }
}

/// Deadline and cancellation for a single call.
///
/// The default sets neither, in which case a call runs until the transport
/// returns.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Abort with [`BinanceError::Timeout`](crate::BinanceError::Timeout) after this long.
    pub timeout: Option<Duration>,
    /// Abort with [`BinanceError::Cancelled`](crate::BinanceError::Cancelled) when cancelled.
    pub cancellation: Option<CancellationToken>,
}

impl CallOptions {
    /// Options with no deadline and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a deadline for the call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a cancellation token.
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}
