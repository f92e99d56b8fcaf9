//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT and SIGTERM handlers (async-safe, via Tokio)
//! - Resolve when any shutdown source fires, so the serve loop can drain

use tokio::sync::broadcast;

/// Wait for a shutdown event: Ctrl+C (SIGINT), SIGTERM, or a trigger on the
/// coordinator the receiver was subscribed from.
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown requested, shutting down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use std::time::Duration;

    #[tokio::test]
    async fn resolves_when_coordinator_triggers() {
        let shutdown = Shutdown::new();
        let wait = tokio::spawn(shutdown_signal(shutdown.subscribe()));

        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), wait)
            .await
            .expect("shutdown_signal did not resolve")
            .unwrap();
    }
}
