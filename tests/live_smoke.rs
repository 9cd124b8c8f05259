use std::sync::Arc;

use binance_api_client::ClientConfig;
use binance_api_client::auth::EnvCredentials;
use binance_api_client::spot::rest::SpotRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("BINANCE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = SpotRestClient::with_config(ClientConfig::from_env());
    let time = client.get_server_time().await?;
    assert!(time.server_time > 0);

    let status = client.get_system_status().await?;
    assert!(!status.msg.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = SpotRestClient::builder()
        .config(ClientConfig::from_env())
        .credentials(Arc::new(credentials))
        .build();

    let _account = client.get_account_info().await?;
    let _deposits = client.get_deposit_history().await?;

    Ok(())
}
