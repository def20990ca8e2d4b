//! Graceful shutdown
//!
//! The worker threads serve requests on their own; the calling thread parks
//! in a small tokio runtime until a shutdown signal arrives, then flips the
//! stop flag and joins the workers.

use std::future::{self, Future};
use std::time::Duration;

use log::{error, info};
use tokio::signal;

use super::http::ServerHandle;

/// How often to check whether the workers died on their own
const WORKER_CHECK_INTERVAL: Duration = Duration::from_millis(250);

/// Serve until `until` resolves, then shut the server down
///
/// Fails if every worker exits before that.
pub fn run_until<F>(handle: ServerHandle, until: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    let workers_died = runtime.block_on(async {
        tokio::select! {
            () = until => false,
            () = workers_finished(&handle) => true,
        }
    });

    if workers_died {
        handle.join();
        anyhow::bail!("All server workers stopped unexpectedly");
    }

    handle.shutdown();
    Ok(())
}

async fn workers_finished(handle: &ServerHandle) {
    while !handle.is_finished() {
        tokio::time::sleep(WORKER_CHECK_INTERVAL).await;
    }
}

/// Resolves on Ctrl+C, or on SIGTERM where available
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                future::pending::<()>().await;
            },
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            },
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
