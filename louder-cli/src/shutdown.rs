//! Signal handling for graceful shutdown.

use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::watch;

/// Creates a future that completes when a shutdown signal is received.
///
/// Listens for SIGTERM and SIGINT (Ctrl+C).
pub async fn shutdown_signal() {
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
        _ = sigint.recv() => {
            tracing::info!("Received SIGINT, initiating graceful shutdown");
        }
    }
}

/// Spawns a task that flips the returned watch to `true` on a shutdown signal.
pub fn spawn_shutdown_listener() -> watch::Receiver<bool> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        tokio::select! {
            _ = shutdown_signal() => {
                let _ = shutdown_tx.send(true);
            }
            _ = shutdown_tx.closed() => {
                tracing::debug!("Shutdown listener no longer needed");
            }
        }
    });

    shutdown_rx
}
