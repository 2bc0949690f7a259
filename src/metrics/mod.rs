//! Run statistics: shared counters, the rolling rate, histogram percentiles
//! and the formatting used by reporters.
mod format;
mod histogram;
mod rate;
mod stats;


pub use format::{format_bytes_compact, format_elapsed, format_milli, format_x100, rate_x100};
pub use histogram::LatencyHistogram;
pub use rate::{RATE_WINDOW, average_rate_milli, rolling_rate_milli};
pub use stats::{AttemptRecord, OutcomeBucket, RequestOutcome, RunStats, StatsSnapshot};
