//! Error types for the Binance client library.
//!
//! Failures reported by the exchange, by its servers, or by the transport are
//! normalized into an [`ApiError`] and returned as ordinary values inside
//! [`BinanceError::Api`]. Callers branch on [`ApiError::kind`] instead of
//! matching on HTTP details.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all Binance client operations.
#[derive(Error, Debug)]
pub enum BinanceError {
    /// The request failed and was classified into the uniform taxonomy.
    #[error("Binance API error: {0}")]
    Api(ApiError),

    /// A successful response could not be decoded into the expected type
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The request could not be built (e.g. a header value with invalid characters)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Credentials are configured but unusable for signing
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for signed endpoints")]
    MissingCredentials,

    /// The per-call deadline elapsed before a response arrived
    #[error("Request timed out")]
    Timeout,

    /// The per-call cancellation token fired before a response arrived
    #[error("Request cancelled")]
    Cancelled,
}

impl BinanceError {
    /// Returns the classified API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this error is a client-side authentication precondition failure.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::MissingCredentials)
    }
}

impl From<ApiError> for BinanceError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

/// Known structured error codes returned by Binance in `{"code": .., "msg": ..}` bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeErrorKind {
    Unknown,
    Disconnected,
    Unauthorized,
    TooManyRequests,
    ServerBusy,
    UnexpectedResp,
    Timeout,
    UnknownOrderComposition,
    TooManyOrders,
    ServiceShuttingDown,
    UnsupportedOperation,
    InvalidTimestamp,
    InvalidSignature,
    NotFound,
    InvalidCharacters,
    InvalidRequest,
    InvalidSymbol,
    InvalidApi,
}

impl ExchangeErrorKind {
    /// The exchange's name for this error, e.g. `INVALID_SYMBOL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Disconnected => "DISCONNECTED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::ServerBusy => "SERVER_BUSY",
            Self::UnexpectedResp => "UNEXPECTED_RESP",
            Self::Timeout => "TIMEOUT",
            Self::UnknownOrderComposition => "UNKNOWN_ORDER_COMPOSITION",
            Self::TooManyOrders => "TOO_MANY_ORDERS",
            Self::ServiceShuttingDown => "SERVICE_SHUTTING_DOWN",
            Self::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            Self::InvalidTimestamp => "INVALID_TIMESTAMP",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidCharacters => "INVALID_CHARACTERS",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidSymbol => "INVALID_SYMBOL",
            Self::InvalidApi => "INVALID_API",
        }
    }
}

/// Uniform classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The host could not be resolved or connected to; no HTTP status was obtained.
    Network,
    /// HTTP 5xx. Not specialized further.
    Server,
    /// HTTP 4xx carrying a recognized exchange error code.
    Exchange(ExchangeErrorKind),
    /// HTTP 403 without an exchange error code.
    Forbidden,
    /// Anything that could not be identified.
    Unknown,
}

impl ApiErrorKind {
    /// Short name of the error condition.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Network => "Host Not Found",
            Self::Server => "Server Error",
            Self::Exchange(kind) => kind.as_str(),
            Self::Forbidden => "Forbidden",
            Self::Unknown => "Invalid",
        }
    }
}

/// A normalized API error.
///
/// Returned inside [`BinanceError::Api`] for network, server and exchange
/// failures alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Exchange error code (e.g. `"-1121"`), HTTP status (e.g. `"403"`), or a fallback code.
    pub code: String,
    /// The classified error condition.
    pub kind: ApiErrorKind,
    /// Human-readable error message
    pub message: String,
    /// HTTP status of the response, when one was received.
    pub status: Option<u16>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.code, self.kind.name(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Code reported when the error could not be identified.
pub const UNKNOWN_ERROR_CODE: &str = "1000";

/// Code reported for transport failures without a native error code.
pub const NETWORK_ERROR_CODE: &str = "0";

/// Binance structured error codes as `(code, kind, message)`.
pub const EXCHANGE_ERRORS: &[(i64, ExchangeErrorKind, &str)] = &[
    (
        -1000,
        ExchangeErrorKind::Unknown,
        "An unknown error occurred while processing the request.",
    ),
    (
        -1001,
        ExchangeErrorKind::Disconnected,
        "Internal error; unable to process your request. Please try again.",
    ),
    (
        -1002,
        ExchangeErrorKind::Unauthorized,
        "You are not authorized to execute this request.",
    ),
    (
        -1003,
        ExchangeErrorKind::TooManyRequests,
        "Too many requests queued.",
    ),
    (
        -1004,
        ExchangeErrorKind::ServerBusy,
        "Server is busy, please wait and try again",
    ),
    (
        -1006,
        ExchangeErrorKind::UnexpectedResp,
        "An unexpected response was received from the message bus. Execution status unknown.",
    ),
    (
        -1007,
        ExchangeErrorKind::Timeout,
        "Timeout waiting for response from backend server. Send status unknown; execution status unknown.",
    ),
    (
        -1014,
        ExchangeErrorKind::UnknownOrderComposition,
        "Unsupported order combination.",
    ),
    (
        -1015,
        ExchangeErrorKind::TooManyOrders,
        "Too many new orders.",
    ),
    (
        -1016,
        ExchangeErrorKind::ServiceShuttingDown,
        "This service is no longer available.",
    ),
    (
        -1020,
        ExchangeErrorKind::UnsupportedOperation,
        "This operation is not supported.",
    ),
    (
        -1021,
        ExchangeErrorKind::InvalidTimestamp,
        "Timestamp for this request is outside of the recvWindow.",
    ),
    (
        -1022,
        ExchangeErrorKind::InvalidSignature,
        "Signature for this request is not valid.",
    ),
    (
        -1099,
        ExchangeErrorKind::NotFound,
        "Not found, authenticated, or authorized.",
    ),
    (
        -1100,
        ExchangeErrorKind::InvalidCharacters,
        "Illegal characters found in parameter 'orderId'; legal range is '^[0-9]{1,20}$'.",
    ),
    (
        -1101,
        ExchangeErrorKind::InvalidRequest,
        "Too many parameters; expected 1 and received 3.",
    ),
    (
        -1102,
        ExchangeErrorKind::InvalidSymbol,
        "Mandatory parameter symbol was not sent, was empty/null, or malformed.",
    ),
    (
        -1104,
        ExchangeErrorKind::InvalidRequest,
        "Not all sent parameters were read; read 1 parameter(s) but was sent 2.",
    ),
    (-1121, ExchangeErrorKind::InvalidSymbol, "Invalid symbol."),
    (-2014, ExchangeErrorKind::InvalidApi, "API-key format invalid."),
];

impl ApiError {
    /// Create a new API error.
    pub fn new(code: impl Into<String>, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            kind,
            message: message.into(),
            status: None,
        }
    }

    fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status.as_u16());
        self
    }

    /// The fallback error used when nothing more specific can be identified.
    pub fn unknown() -> Self {
        Self::new(
            UNKNOWN_ERROR_CODE,
            ApiErrorKind::Unknown,
            "Unable to identify the type of error.",
        )
    }

    /// A transport failure that happened before any HTTP status was obtained.
    pub fn network(host: &str) -> Self {
        Self::new(
            NETWORK_ERROR_CODE,
            ApiErrorKind::Network,
            format!("Could not resolve or connect to host {host}"),
        )
    }

    /// A 5xx response.
    pub fn server(status: StatusCode) -> Self {
        Self::new(status.as_u16().to_string(), ApiErrorKind::Server, "Server error.")
            .with_status(status)
    }

    /// A 403 response without an exchange error code.
    pub fn forbidden() -> Self {
        Self::new(
            StatusCode::FORBIDDEN.as_str(),
            ApiErrorKind::Forbidden,
            "You don't have permission to access this resource.",
        )
        .with_status(StatusCode::FORBIDDEN)
    }

    /// Look up a structured exchange error code in [`EXCHANGE_ERRORS`].
    pub fn from_exchange_code(code: i64) -> Option<Self> {
        EXCHANGE_ERRORS
            .iter()
            .find(|(known, _, _)| *known == code)
            .map(|(code, kind, message)| {
                Self::new(code.to_string(), ApiErrorKind::Exchange(*kind), *message)
            })
    }

    /// Classify a non-successful HTTP response.
    ///
    /// `body` is the raw response body; it is only inspected for a structured
    /// `code` field on client errors.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if status.is_server_error() {
            return Self::server(status);
        }

        if !status.is_client_error() {
            return Self::unknown().with_status(status);
        }

        match exchange_code(body) {
            Some(code) => Self::from_exchange_code(code)
                .unwrap_or_else(Self::unknown)
                .with_status(status),
            None if status == StatusCode::FORBIDDEN => Self::forbidden(),
            None => Self::unknown().with_status(status),
        }
    }

    /// Check if this is a network-level failure.
    pub fn is_network(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }

    /// Check if this error reports a clock drift beyond the receive window.
    pub fn is_invalid_timestamp(&self) -> bool {
        self.kind == ApiErrorKind::Exchange(ExchangeErrorKind::InvalidTimestamp)
    }

    /// Check if this error reports a rejected signature.
    pub fn is_invalid_signature(&self) -> bool {
        self.kind == ApiErrorKind::Exchange(ExchangeErrorKind::InvalidSignature)
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(
            self.kind,
            ApiErrorKind::Exchange(ExchangeErrorKind::TooManyRequests | ExchangeErrorKind::TooManyOrders)
        )
    }
}

/// Extract the structured `code` field from an error body.
///
/// Binance sends it as a JSON number; numeric strings are accepted too.
fn exchange_code(body: &str) -> Option<i64> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("code")? {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_maps_to_table_entry() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"code":-1121,"msg":"Invalid symbol."}"#);
        assert_eq!(err.code, "-1121");
        assert_eq!(err.kind, ApiErrorKind::Exchange(ExchangeErrorKind::InvalidSymbol));
        assert_eq!(err.kind.name(), "INVALID_SYMBOL");
        assert_eq!(err.message, "Invalid symbol.");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn test_string_code_is_accepted() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"code":"-1022"}"#);
        assert!(err.is_invalid_signature());
    }

    #[test]
    fn test_unrecognized_code_falls_back_to_default() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"code":-9999,"msg":"??"}"#);
        assert_eq!(err.code, UNKNOWN_ERROR_CODE);
        assert_eq!(err.kind, ApiErrorKind::Unknown);
        assert_eq!(err.kind.name(), "Invalid");
    }

    #[test]
    fn test_forbidden_without_code() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, "<html>WAF</html>");
        assert_eq!(err.code, "403");
        assert_eq!(err.kind, ApiErrorKind::Forbidden);
    }

    #[test]
    fn test_forbidden_with_code_uses_table() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, r#"{"code":-2014}"#);
        assert_eq!(err.kind, ApiErrorKind::Exchange(ExchangeErrorKind::InvalidApi));
    }

    #[test]
    fn test_client_error_without_code_records_status() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, "");
        assert_eq!(err.code, UNKNOWN_ERROR_CODE);
        assert_eq!(err.kind, ApiErrorKind::Unknown);
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn test_server_error_ignores_body_code() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, r#"{"code":-1121}"#);
        assert_eq!(err.code, "502");
        assert_eq!(err.kind, ApiErrorKind::Server);
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        let mut codes: Vec<i64> = EXCHANGE_ERRORS.iter().map(|(code, _, _)| *code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), EXCHANGE_ERRORS.len());
    }

    #[test]
    fn test_every_documented_code_is_classified() {
        let expected = [
            (-1000, "UNKNOWN"),
            (-1001, "DISCONNECTED"),
            (-1002, "UNAUTHORIZED"),
            (-1003, "TOO_MANY_REQUESTS"),
            (-1004, "SERVER_BUSY"),
            (-1006, "UNEXPECTED_RESP"),
            (-1007, "TIMEOUT"),
            (-1014, "UNKNOWN_ORDER_COMPOSITION"),
            (-1015, "TOO_MANY_ORDERS"),
            (-1016, "SERVICE_SHUTTING_DOWN"),
            (-1020, "UNSUPPORTED_OPERATION"),
            (-1021, "INVALID_TIMESTAMP"),
            (-1022, "INVALID_SIGNATURE"),
            (-1099, "NOT_FOUND"),
            (-1100, "INVALID_CHARACTERS"),
            (-1101, "INVALID_REQUEST"),
            (-1102, "INVALID_SYMBOL"),
            (-1104, "INVALID_REQUEST"),
            (-1121, "INVALID_SYMBOL"),
            (-2014, "INVALID_API"),
        ];
        assert_eq!(EXCHANGE_ERRORS.len(), expected.len());

        for (code, name) in expected {
            let err = ApiError::from_exchange_code(code)
                .unwrap_or_else(|| panic!("code {code} missing from table"));
            assert_eq!(err.code, code.to_string());
            assert_eq!(err.kind.name(), name, "code {code}");
            assert!(!err.message.is_empty());

            let body = format!(r#"{{"code":{code},"msg":"x"}}"#);
            let classified = ApiError::from_response(StatusCode::BAD_REQUEST, &body);
            assert_eq!(classified.kind.name(), name, "code {code}");
        }
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::from_exchange_code(-1003).unwrap();
        assert_eq!(error.to_string(), "-1003 TOO_MANY_REQUESTS: Too many requests queued.");
        assert!(error.is_rate_limit());
    }

    #[test]
    fn test_network_error() {
        let error = ApiError::network("https://api.binance.com/api/");
        assert!(error.is_network());
        assert_eq!(error.code, NETWORK_ERROR_CODE);
        assert!(error.status.is_none());
    }
}
