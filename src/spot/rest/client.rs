//! Binance Spot REST API client implementation.

use std::future::Future;
use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{Clock, Credentials, CredentialsProvider, SignedQuery, SystemClock};
use crate::config::ClientConfig;
use crate::error::{ApiError, BinanceError};
use crate::spot::rest::endpoints::{API_KEY_HEADER, Host};
use crate::spot::rest::private::{AccountInfo, AccountTrade, Order};
use crate::spot::rest::public::{AveragePrice, RecentTrade, ServerTime, SystemStatus};
use crate::spot::rest::query::QueryParams;
use crate::spot::rest::request::{CallOptions, RequestSpec};
use crate::spot::rest::traits::BinanceClient;

/// The Binance Spot REST API client.
///
/// Every request is dispatched through [`SpotRestClient::execute`], which
/// chooses the host, adds `timestamp` / `recvWindow`, signs `USER_DATA`
/// requests and classifies failures into [`ApiError`]s.
///
/// The client holds only immutable configuration; the host is chosen per
/// call, so one instance can be shared between concurrent tasks.
///
/// # Example
///
/// ```rust,no_run
/// use binance_api_client::spot::rest::SpotRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = SpotRestClient::new();
///
///     let time = client.get_server_time().await?;
///     println!("Server time: {}", time.server_time);
///
///     Ok(())
/// }
/// ```
///
/// For signed endpoints, provide credentials:
///
/// ```rust,no_run
/// use binance_api_client::spot::rest::SpotRestClient;
/// use binance_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = SpotRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let account = client.get_account_info().await?;
///     println!("Balances: {:?}", account.balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotRestClient {
    http_client: ClientWithMiddleware,
    config: ClientConfig,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    clock: Arc<dyn Clock>,
}

impl SpotRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`SpotRestClient::builder()`] to configure credentials for signed endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Create a new client builder.
    pub fn builder() -> SpotRestClientBuilder {
        SpotRestClientBuilder::new()
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Replace the credentials.
    ///
    /// Key and secret always travel together in one provider, so a
    /// mismatched pair can never be observed.
    pub fn set_credentials(&mut self, credentials: Arc<dyn CredentialsProvider>) {
        self.credentials = Some(credentials);
    }

    /// Remove the credentials; signed endpoints fail until new ones are set.
    pub fn clear_credentials(&mut self) {
        self.credentials = None;
    }

    /// The base URL for `host`.
    pub fn base_url(&self, host: Host) -> &str {
        match host {
            Host::Primary => &self.config.primary_base_url,
            Host::Secondary => &self.config.secondary_base_url,
        }
    }

    /// Build the full request URL for an already encoded query string.
    pub fn endpoint_url(&self, host: Host, endpoint: &str, query: &str) -> String {
        let mut url = format!(
            "{}/{}",
            self.base_url(host).trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// Build the query string that will be sent for `request`.
    ///
    /// Adds `timestamp` and `recvWindow` when the endpoint requires them and,
    /// for signed requests, appends the signature computed over everything
    /// before it. A `timestamp` or `recvWindow` already in the request's
    /// parameters keeps its position but takes the client's value.
    pub fn build_query(&self, request: &RequestSpec) -> Result<String, BinanceError> {
        let credentials = if request.is_signed() {
            Some(self.signing_credentials()?)
        } else {
            None
        };
        self.query_string(request, credentials)
    }

    fn query_string(
        &self,
        request: &RequestSpec,
        signing: Option<&Credentials>,
    ) -> Result<String, BinanceError> {
        let mut params = request.params.clone();

        if request.requires_timestamp {
            let timestamp = self.clock.now_millis();
            let recv_window = self.config.effective_recv_window();
            if signing.is_some() {
                params.push("recvWindow", Some(recv_window));
                params.push("timestamp", Some(timestamp));
            } else {
                params.push("timestamp", Some(timestamp));
                params.push("recvWindow", Some(recv_window));
            }
        }

        let canonical_query = params.to_query_string();
        match signing {
            Some(credentials) => {
                Ok(SignedQuery::sign(canonical_query, credentials)?.into_query_string())
            }
            None => Ok(canonical_query),
        }
    }

    fn signing_credentials(&self) -> Result<&Credentials, BinanceError> {
        let credentials = self
            .credentials
            .as_deref()
            .ok_or(BinanceError::MissingCredentials)?
            .get_credentials();
        credentials.validate()?;
        Ok(credentials)
    }

    /// Send a request and decode the response.
    ///
    /// Signed requests without usable credentials fail before any network
    /// I/O. Network, server and exchange failures are returned as
    /// [`BinanceError::Api`].
    pub async fn execute<T>(
        &self,
        request: RequestSpec,
        options: &CallOptions,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        let signing = if request.is_signed() {
            Some(self.signing_credentials()?)
        } else {
            None
        };
        // The key header goes on every call, public ones included. Without
        // credentials there is no key, so the header is left off.
        let api_key = self
            .credentials
            .as_deref()
            .map(|provider| provider.get_credentials().api_key.as_str());

        let query = self.query_string(&request, signing)?;
        let url = self.endpoint_url(request.host, &request.endpoint, &query);
        let base_url = self.base_url(request.host);

        tracing::debug!(
            method = %request.method,
            host = ?request.host,
            endpoint = %request.endpoint,
            signed = request.is_signed(),
            "Dispatching request"
        );

        let mut builder = self.http_client.request(request.method.clone(), &url);
        if let Some(api_key) = api_key {
            builder = builder.header(API_KEY_HEADER, api_key);
        }

        let exchange = async {
            let response = builder
                .send()
                .await
                .map_err(|e| transport_error(e, base_url))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| transport_error(e.into(), base_url))?;
            Ok::<_, BinanceError>((status, body))
        };

        let (status, body) = with_call_options(exchange, options).await?;
        parse_response(&request.endpoint, status, &body)
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        self.execute(RequestSpec::get(endpoint).params(params), &CallOptions::default())
            .await
    }

    /// Make a signed GET request.
    pub(crate) async fn signed_get<T>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        self.execute(
            RequestSpec::get(endpoint).params(params).signed(),
            &CallOptions::default(),
        )
        .await
    }
}

/// Run `future` under the call's deadline and cancellation token.
async fn with_call_options<F, T>(future: F, options: &CallOptions) -> Result<T, BinanceError>
where
    F: Future<Output = Result<T, BinanceError>>,
{
    let bounded = async {
        match options.timeout {
            Some(timeout) => tokio::time::timeout(timeout, future)
                .await
                .map_err(|_| BinanceError::Timeout)?,
            None => future.await,
        }
    };

    match &options.cancellation {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(BinanceError::Cancelled),
            result = bounded => result,
        },
        None => bounded.await,
    }
}

fn transport_error(err: reqwest_middleware::Error, base_url: &str) -> BinanceError {
    if let reqwest_middleware::Error::Reqwest(e) = &err {
        if e.is_builder() {
            return BinanceError::InvalidRequest(e.to_string());
        }
    }
    tracing::warn!(host = %base_url, error = %err, "Could not reach host");
    BinanceError::Api(ApiError::network(base_url))
}

fn parse_response<T>(endpoint: &str, status: StatusCode, body: &str) -> Result<T, BinanceError>
where
    T: DeserializeOwned,
{
    if status.is_success() {
        return serde_json::from_str(body).map_err(|e| {
            BinanceError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        });
    }

    let error = ApiError::from_response(status, body);
    tracing::warn!(
        endpoint = %endpoint,
        status = status.as_u16(),
        code = %error.code,
        kind = error.kind.name(),
        "Request failed"
    );
    Err(BinanceError::Api(error))
}

impl Default for SpotRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpotRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotRestClient")
            .field("config", &self.config)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`SpotRestClient`].
pub struct SpotRestClientBuilder {
    config: ClientConfig,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    clock: Option<Arc<dyn Clock>>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl SpotRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            clock: None,
            user_agent: None,
            max_retries: 0,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the primary base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.primary_base_url = url.into();
        self
    }

    /// Set the secondary ("sapi") base URL.
    pub fn secondary_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.secondary_base_url = url.into();
        self
    }

    /// Set the receive window in milliseconds. Non-positive values mean the default.
    pub fn recv_window(mut self, recv_window_ms: i64) -> Self {
        self.config.recv_window_ms = recv_window_ms;
        self
    }

    /// Set the credentials provider for signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom clock for request timestamps.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Retry transient failures up to `retries` times. Defaults to 0.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> SpotRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("binance-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("binance-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut client = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            client = client.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        SpotRestClient {
            http_client: client.build(),
            config: self.config,
            credentials: self.credentials,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}

impl Default for SpotRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// BinanceClient trait implementation.

impl BinanceClient for SpotRestClient {
    // ========== Public Endpoints ==========

    async fn get_system_status(&self) -> Result<SystemStatus, BinanceError> {
        SpotRestClient::get_system_status(self).await
    }

    async fn get_server_time(&self) -> Result<ServerTime, BinanceError> {
        SpotRestClient::get_server_time(self).await
    }

    async fn get_exchange_info(&self, symbol: Option<&str>) -> Result<Value, BinanceError> {
        SpotRestClient::get_exchange_info(self, symbol).await
    }

    async fn get_order_book(&self, symbol: &str) -> Result<Vec<RecentTrade>, BinanceError> {
        SpotRestClient::get_order_book(self, symbol).await
    }

    async fn get_avg_price(&self, symbol: Option<&str>) -> Result<AveragePrice, BinanceError> {
        SpotRestClient::get_avg_price(self, symbol).await
    }

    async fn get_ticker(&self, symbol: Option<&str>) -> Result<Value, BinanceError> {
        SpotRestClient::get_ticker(self, symbol).await
    }

    // ========== Private Endpoints ==========

    async fn get_account_info(&self) -> Result<AccountInfo, BinanceError> {
        SpotRestClient::get_account_info(self).await
    }

    async fn get_all_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>, BinanceError> {
        SpotRestClient::get_all_orders(self, symbol).await
    }

    async fn get_open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>, BinanceError> {
        SpotRestClient::get_open_orders(self, symbol).await
    }

    async fn get_trades(&self, symbol: Option<&str>) -> Result<Vec<AccountTrade>, BinanceError> {
        SpotRestClient::get_trades(self, symbol).await
    }

    async fn get_order_status(
        &self,
        symbol: Option<&str>,
        order_id: Option<u64>,
    ) -> Result<Order, BinanceError> {
        SpotRestClient::get_order_status(self, symbol, order_id).await
    }

    async fn get_user_coins_info(&self) -> Result<Value, BinanceError> {
        SpotRestClient::get_user_coins_info(self).await
    }

    async fn get_deposit_history(&self) -> Result<Value, BinanceError> {
        SpotRestClient::get_deposit_history(self).await
    }

    async fn get_withdraw_history(&self) -> Result<Value, BinanceError> {
        SpotRestClient::get_withdraw_history(self).await
    }
}
