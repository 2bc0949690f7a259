use tokio::sync::broadcast;
use tracing::{info, warn};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Fires once when a run has finished, releasing helper tasks.
pub type ShutdownSender = broadcast::Sender<()>;
pub type ShutdownReceiver = broadcast::Receiver<()>;

/// Broadcast channel size for shutdown notifications (single signal fan-out).
const SHUTDOWN_CHANNEL_CAPACITY: usize = 1;
/// Exit status used when a second interrupt abandons the stop.
const FORCED_EXIT_CODE: i32 = 130;

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    broadcast::channel::<()>(SHUTDOWN_CHANNEL_CAPACITY)
}

async fn interrupted() {
    #[cfg(unix)]
    {
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                eprintln!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            () = async {
                if let Some(signal) = term_signal.as_mut() {
                    signal.recv().await;
                } else {
                    std::future::pending::<()>().await;
                }
            } => {}
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Turns Ctrl+C / SIGTERM into a cooperative stop via `request_stop`. A
/// second interrupt exits the process immediately. The task ends when the
/// run signals completion on `shutdown_tx`.
pub fn setup_signal_shutdown_handler<F>(
    shutdown_tx: &ShutdownSender,
    request_stop: F,
) -> tokio::task::JoinHandle<()>
where
    F: Fn() -> bool + Send + 'static,
{
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        let mut stop_requested = false;
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                () = interrupted() => {
                    if stop_requested {
                        warn!("Second interrupt received; exiting without waiting for workers");
                        std::process::exit(FORCED_EXIT_CODE);
                    }
                    stop_requested = true;
                    if request_stop() {
                        info!("Interrupt received; stopping run (press Ctrl+C again to force)");
                    }
                }
            }
        }
    })
}
