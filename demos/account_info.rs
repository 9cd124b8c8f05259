//! Example: Signed account endpoints.
//!
//! Reads `BINANCE_API_KEY` and `BINANCE_API_SECRET` (a `.env` file works too).
//!
//! Run with: cargo run --example account_info

use std::sync::Arc;
use std::time::Duration;

use binance_api_client::ClientConfig;
use binance_api_client::auth::EnvCredentials;
use binance_api_client::spot::rest::{CallOptions, QueryParams, RequestSpec, SpotRestClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = EnvCredentials::from_env()?;
    let client = SpotRestClient::builder()
        .config(ClientConfig::from_env())
        .credentials(Arc::new(credentials))
        .build();

    let account = client.get_account_info().await?;
    for balance in account.balances.iter().filter(|b| !b.free.is_zero()) {
        println!("{}: {} free, {} locked", balance.asset, balance.free, balance.locked);
    }

    let open = client.get_open_orders(Some("btcusdt")).await?;
    println!("Open BTCUSDT orders: {}", open.len());

    // Any endpoint can be called through the dispatcher directly, with a deadline.
    let request = RequestSpec::get("v1/asset/tradeFee")
        .params(QueryParams::new().with("symbol", Some("BTCUSDT")))
        .host(binance_api_client::spot::rest::Host::Secondary)
        .signed();
    let options = CallOptions::new().timeout(Duration::from_secs(5));
    let fees: serde_json::Value = client.execute(request, &options).await?;
    println!("Trade fee: {fees}");

    Ok(())
}
