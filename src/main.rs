//! Fixture server entry point.
//!
//! Runs the fixture on its well-known port (38212) until SIGINT or SIGTERM
//! arrives. No flags, no config file: test harnesses rely on the fixed
//! defaults.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fixture_server::config::FixtureConfig;
use fixture_server::http::HttpServer;
use fixture_server::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fixture_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = FixtureConfig::default();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        delay_ms = config.delay.response_ms,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
