use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use auth::{AlertAuthenticator, BitgetCredentials};
use bitget_rest::BitgetRestClient;
use common::RelayConfig;
use relay::{DryRunSubmitter, LiveOrderSubmitter, MarkPriceSource, OrderSubmitter, Pipeline};
use server::{create_router, AppState};

#[tokio::main]
async fn main() {
    common::init_logging();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Missing configuration is fatal: the relay never serves traffic in a
    // half-configured state.
    let config = RelayConfig::from_env()?;
    let credentials = BitgetCredentials::from_env()?;

    let client = Arc::new(BitgetRestClient::new(
        credentials,
        config.environment,
        config.margin_coin.clone(),
        config.order_endpoint.clone(),
        config.request_timeout,
    )?);

    info!(
        environment = %config.environment,
        dry_run = config.dry_run,
        listen_addr = %config.listen_addr,
        api_key = client.api_key(),
        "Starting alert relay"
    );

    let submitter: Arc<dyn OrderSubmitter> = if config.dry_run {
        info!("Dry run enabled: orders will be signed but never sent");
        Arc::new(DryRunSubmitter)
    } else {
        // Best-effort preflight: surfaces bad credentials before the first
        // alert arrives, without blocking startup on exchange availability.
        match client.available_balance().await {
            Ok(balance) => info!(
                available = %balance,
                margin_coin = %config.margin_coin,
                "Futures account reachable"
            ),
            Err(e) => warn!(error = %e, "Balance preflight failed"),
        }

        Arc::new(LiveOrderSubmitter::new(Arc::clone(&client)))
    };

    let pipeline = Arc::new(Pipeline::new(
        AlertAuthenticator::new(config.alert_secret.clone()),
        Arc::clone(&client),
        Arc::clone(&client) as Arc<dyn MarkPriceSource>,
        submitter,
    ));

    let router = create_router(Arc::new(AppState { pipeline }));

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for alerts");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl+C, shutting down");
    }
}
