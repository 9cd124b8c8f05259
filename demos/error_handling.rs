//! Example: Branching on classified errors.
//!
//! Run with: cargo run --example error_handling

use binance_api_client::error::{ApiError, ApiErrorKind, ExchangeErrorKind};
use binance_api_client::spot::rest::SpotRestClient;
use binance_api_client::BinanceError;

#[tokio::main]
async fn main() {
    let client = SpotRestClient::new();

    match client.get_avg_price(Some("NOT-A-SYMBOL")).await {
        Ok(price) => println!("Unexpected price: {}", price.price),
        Err(BinanceError::Api(err)) => describe(&err),
        Err(other) => println!("Client error: {other}"),
    }

    // Signed calls without credentials fail before anything is sent.
    match client.get_account_info().await {
        Err(err) if err.is_authentication() => println!("No credentials: {err}"),
        other => println!("Unexpected: {other:?}"),
    }
}

fn describe(err: &ApiError) {
    match err.kind {
        ApiErrorKind::Network => println!("Exchange unreachable: {}", err.message),
        ApiErrorKind::Server => println!("Exchange-side failure (HTTP {})", err.code),
        ApiErrorKind::Exchange(ExchangeErrorKind::InvalidSymbol) => {
            println!("Bad symbol: {}", err.message)
        }
        ApiErrorKind::Exchange(kind) => println!("{}: {}", kind.as_str(), err.message),
        ApiErrorKind::Forbidden => println!("Forbidden: {}", err.message),
        ApiErrorKind::Unknown => println!("Unidentified error (status {:?})", err.status),
    }
}
