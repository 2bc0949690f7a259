use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::format::rate_x100;
use super::rate::rolling_rate_milli;

/// How one attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Status(u16),
    TimedOut,
    Failed,
}

/// Counter an outcome is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeBucket {
    Info,
    Successful,
    Redirected,
    Failed,
    ServerError,
    TimedOut,
}

impl RequestOutcome {
    #[must_use]
    pub const fn bucket(self) -> OutcomeBucket {
        match self {
            RequestOutcome::Status(100..=199) => OutcomeBucket::Info,
            RequestOutcome::Status(200..=299) => OutcomeBucket::Successful,
            RequestOutcome::Status(300..=399) => OutcomeBucket::Redirected,
            RequestOutcome::Status(500..=599) => OutcomeBucket::ServerError,
            RequestOutcome::Status(_) | RequestOutcome::Failed => OutcomeBucket::Failed,
            RequestOutcome::TimedOut => OutcomeBucket::TimedOut,
        }
    }
}

/// One completed attempt as workers report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptRecord {
    pub outcome: RequestOutcome,
    pub response_time: Duration,
    pub sent_bytes: u64,
    pub received_bytes: u64,
}

/// Point-in-time copy of the counters. Counters are read one by one, so a
/// snapshot taken mid-run may be off by the attempts in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub requests_sent: u64,
    pub successful: u64,
    pub failed: u64,
    pub redirected: u64,
    pub info: u64,
    pub server_error: u64,
    pub timed_out: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub elapsed_ms: u64,
    /// Rolling requests/sec ×1000 over the latest samples.
    pub current_rate_milli: Option<u64>,
    /// successful / requests_sent ×100, stored ×100.
    pub success_rate_x100: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl StatsSnapshot {
    #[must_use]
    pub const fn bucket_total(&self) -> u64 {
        self.successful
            .saturating_add(self.failed)
            .saturating_add(self.redirected)
            .saturating_add(self.info)
            .saturating_add(self.server_error)
            .saturating_add(self.timed_out)
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }
}

#[derive(Debug, Default)]
struct Series {
    request_times: Vec<Duration>,
    response_times_ms: Vec<u64>,
    request_rates: Vec<(Duration, u64)>,
}

/// Counters and time series of one run. Shared by every worker and read by
/// observers while the run is live; a new run gets a fresh instance.
#[derive(Debug)]
pub struct RunStats {
    requests_sent: AtomicU64,
    successful: AtomicU64,
    failed: AtomicU64,
    redirected: AtomicU64,
    info: AtomicU64,
    server_error: AtomicU64,
    timed_out: AtomicU64,
    bytes_sent: AtomicU64,
    bytes_received: AtomicU64,
    started: Instant,
    started_at: DateTime<Utc>,
    finished: OnceLock<(Instant, DateTime<Utc>)>,
    series: Mutex<Series>,
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests_sent: AtomicU64::new(0),
            successful: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            redirected: AtomicU64::new(0),
            info: AtomicU64::new(0),
            server_error: AtomicU64::new(0),
            timed_out: AtomicU64::new(0),
            bytes_sent: AtomicU64::new(0),
            bytes_received: AtomicU64::new(0),
            started: Instant::now(),
            started_at: Utc::now(),
            finished: OnceLock::new(),
            series: Mutex::new(Series::default()),
        }
    }

    fn series(&self) -> MutexGuard<'_, Series> {
        self.series.lock().unwrap_or_else(PoisonError::into_inner)
    }

    const fn counter(&self, bucket: OutcomeBucket) -> &AtomicU64 {
        match bucket {
            OutcomeBucket::Info => &self.info,
            OutcomeBucket::Successful => &self.successful,
            OutcomeBucket::Redirected => &self.redirected,
            OutcomeBucket::Failed => &self.failed,
            OutcomeBucket::ServerError => &self.server_error,
            OutcomeBucket::TimedOut => &self.timed_out,
        }
    }

    /// Counts one attempt, appends its timestamp and refreshes the rolling
    /// rate. Attempts landing after [`RunStats::finish`] are dropped so a
    /// closed run stays frozen.
    pub fn record(&self, attempt: AttemptRecord) {
        if self.is_finished() {
            return;
        }
        self.counter(attempt.outcome.bucket()).fetch_add(1, Ordering::Relaxed);
        self.requests_sent.fetch_add(1, Ordering::Relaxed);
        self.bytes_sent
            .fetch_add(attempt.sent_bytes, Ordering::Relaxed);
        self.bytes_received
            .fetch_add(attempt.received_bytes, Ordering::Relaxed);

        let at = self.started.elapsed();
        let response_ms = u64::try_from(attempt.response_time.as_millis()).unwrap_or(u64::MAX);
        let mut series = self.series();
        series.request_times.push(at);
        series.response_times_ms.push(response_ms);
        if let Some(rate) = rolling_rate_milli(&series.request_times) {
            series.request_rates.push((at, rate));
        }
    }

    /// Stamps the end of the run. Only the first call has any effect.
    pub fn finish(&self) -> bool {
        self.finished.set((Instant::now(), Utc::now())).is_ok()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.get().is_some()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished.get().map_or_else(
            || self.started.elapsed(),
            |(ended, _)| ended.saturating_duration_since(self.started),
        )
    }

    #[must_use]
    pub fn requests_sent(&self) -> u64 {
        self.requests_sent.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn success_rate_x100(&self) -> u64 {
        rate_x100(
            self.successful.load(Ordering::Relaxed),
            self.requests_sent(),
        )
    }

    /// Latest rolling rate, ×1000.
    #[must_use]
    pub fn current_rate_milli(&self) -> Option<u64> {
        self.series().request_rates.last().map(|(_, rate)| *rate)
    }

    #[must_use]
    pub fn response_times_ms(&self) -> Vec<u64> {
        self.series().response_times_ms.clone()
    }

    #[must_use]
    pub fn request_times(&self) -> Vec<Duration> {
        self.series().request_times.clone()
    }

    #[must_use]
    pub fn request_rates(&self) -> Vec<(Duration, u64)> {
        self.series().request_rates.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        let successful = self.successful.load(Ordering::Relaxed);
        let requests_sent = self.requests_sent();
        StatsSnapshot {
            requests_sent,
            successful,
            failed: self.failed.load(Ordering::Relaxed),
            redirected: self.redirected.load(Ordering::Relaxed),
            info: self.info.load(Ordering::Relaxed),
            server_error: self.server_error.load(Ordering::Relaxed),
            timed_out: self.timed_out.load(Ordering::Relaxed),
            bytes_sent: self.bytes_sent.load(Ordering::Relaxed),
            bytes_received: self.bytes_received.load(Ordering::Relaxed),
            elapsed_ms: u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
            current_rate_milli: self.current_rate_milli(),
            success_rate_x100: rate_x100(successful, requests_sent),
            started_at: self.started_at,
            finished_at: self.finished.get().map(|(_, at)| *at),
        }
    }
}
