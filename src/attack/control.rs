use tokio::sync::watch;

/// Cooperative stop flag shared by every worker of a run. Workers check it
/// between attempts and while sleeping; an in-flight request is never
/// interrupted.
#[derive(Debug, Clone)]
pub struct StopSignal {
    rx: watch::Receiver<bool>,
}

impl StopSignal {
    #[must_use]
    pub const fn new(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once a stop is requested or the run's sender is gone.
    pub async fn stopped(&mut self) {
        drop(self.rx.wait_for(|stopped| *stopped).await);
    }
}

#[must_use]
pub fn stop_channel() -> (watch::Sender<bool>, StopSignal) {
    let (tx, rx) = watch::channel(false);
    (tx, StopSignal::new(rx))
}
