//! # Binance Client
//!
//! An async Rust client library for the Binance Spot REST API.
//!
//! ## Features
//!
//! - Public and signed (`USER_DATA`) endpoints
//! - HMAC-SHA256 request signing over the exact transmitted query
//! - Automatic `timestamp` / `recvWindow` handling
//! - Per-call routing between the `api` and `sapi` hosts
//! - A uniform error taxonomy for network, server and exchange failures
//! - Per-call deadlines and cancellation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binance_api_client::spot::rest::SpotRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotRestClient::new();
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {:?}", time);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod spot;

// Re-export commonly used types at crate root
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, BinanceError, ExchangeErrorKind};

/// Result type alias using BinanceError
pub type Result<T> = std::result::Result<T, BinanceError>;
