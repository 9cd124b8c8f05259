//! Binance Spot REST API client.
//!
//! Every endpoint method goes through one dispatch pipeline:
//!
//! 1. [`QueryParams`] builds the canonical, order-preserving query string.
//! 2. `timestamp` / `recvWindow` are added unless the endpoint is exempt.
//! 3. `USER_DATA` requests are signed with HMAC-SHA256.
//! 4. The request goes to the primary or secondary host chosen for that call.
//! 5. Failures are classified into an [`ApiError`](crate::error::ApiError).
//!
//! # Trait-based API
//!
//! The [`BinanceClient`] trait abstracts the endpoint methods, enabling mock
//! implementations and decorators.

mod client;
pub mod endpoints;
pub mod private;
pub mod public;
mod query;
mod request;
mod traits;

pub use client::{SpotRestClient, SpotRestClientBuilder};
pub use endpoints::Host;
pub use query::QueryParams;
pub use request::{CallOptions, RequestSpec, SecurityType};
pub use traits::BinanceClient;
