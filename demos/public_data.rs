//! Example: Public market data endpoints.
//!
//! Run with: cargo run --example public_data

use binance_api_client::ClientConfig;
use binance_api_client::spot::rest::SpotRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = SpotRestClient::with_config(ClientConfig::from_env());

    let status = client.get_system_status().await?;
    println!("System status: {} ({})", status.msg, status.status);

    let time = client.get_server_time().await?;
    println!("Server time: {}", time.server_time);

    let avg = client.get_avg_price(Some("btcusdt")).await?;
    println!("BTCUSDT {}-minute average: {}", avg.mins, avg.price);

    let trades = client.get_order_book("btcusdt").await?;
    for trade in trades.iter().take(5) {
        println!("  trade {}: {} @ {}", trade.id, trade.qty, trade.price);
    }

    let ticker = client.get_ticker(Some("btcusdt")).await?;
    println!("24h change: {}", ticker["priceChangePercent"]);

    Ok(())
}
