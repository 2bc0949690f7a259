use std::fmt;
use std::time::Duration;

use tracing::info;

use crate::metrics::{RequestOutcome, RunStats, format_elapsed, format_x100};

use super::dispatcher::RunState;

/// One finished attempt, as shown in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEvent {
    pub worker: usize,
    pub outcome: RequestOutcome,
    pub sent_bytes: u64,
    pub received_bytes: u64,
    pub elapsed: Duration,
}

impl fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread:{} status:", self.worker)?;
        match self.outcome {
            RequestOutcome::Status(code) => write!(f, "{}", code)?,
            RequestOutcome::TimedOut => f.write_str("timeout")?,
            RequestOutcome::Failed => f.write_str("error")?,
        }
        write!(
            f,
            " sent:{} received:{} in {}ms",
            self.sent_bytes,
            self.received_bytes,
            self.elapsed.as_millis()
        )
    }
}

/// Callbacks fired by the dispatcher. Called from worker tasks, so
/// implementations must be cheap and must not block.
pub trait RunObserver: Send + Sync {
    /// After every recorded attempt.
    fn on_stats_update(&self, _stats: &RunStats) {}

    /// Once per attempt, after the stats update.
    fn on_activity(&self, event: &ActivityEvent) {
        info!(target: "activity", "{}", event);
    }

    /// Exactly once when a run completes or stops.
    fn on_finish_run(&self, _stats: &RunStats, _state: RunState) {}
}

/// Observer that only writes the activity log and a closing line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl RunObserver for LoggingObserver {
    fn on_finish_run(&self, stats: &RunStats, state: RunState) {
        let snapshot = stats.snapshot();
        info!(
            "Run {} after {}: {} sent, {}% successful",
            state.as_str(),
            format_elapsed(snapshot.elapsed()),
            snapshot.requests_sent,
            format_x100(snapshot.success_rate_x100)
        );
    }
}
