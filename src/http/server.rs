//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with the dispatch handler
//! - Wire up middleware (tracing, request timeout)
//! - Serve on a listener with graceful shutdown

use std::time::Duration;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::FixtureConfig;
use crate::http::handlers;
use crate::lifecycle::signals;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: FixtureConfig,
}

/// HTTP server for the fixture.
pub struct HttpServer {
    router: Router,
    config: FixtureConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FixtureConfig) -> Self {
        let state = AppState {
            config: config.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Every path goes through the one dispatch handler; route selection by
    /// prefix happens there, so arbitrary subpaths of `/reverse` and
    /// `/delayed` reach the right branch.
    fn build_router(config: &FixtureConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(handlers::dispatch))
            .route("/", any(handlers::dispatch))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once a shutdown signal arrives: SIGINT, SIGTERM, or a trigger
    /// on the [`crate::lifecycle::Shutdown`] coordinator the receiver came
    /// from.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            delay_ms = self.config.delay.response_ms,
            "Fixture server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signals::shutdown_signal(shutdown))
            .await?;

        tracing::info!("Fixture server stopped");
        Ok(())
    }
}
