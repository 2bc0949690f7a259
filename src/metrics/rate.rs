use std::time::Duration;

/// Number of trailing samples the rolling rate looks at.
pub const RATE_WINDOW: usize = 10;

const MILLI_PER_UNIT_MICROS: u128 = 1_000_000_000;

/// Requests per second over the last `RATE_WINDOW` timestamps, scaled by
/// 1000. `None` when fewer than two samples exist or they share one instant.
#[must_use]
pub fn rolling_rate_milli(timestamps: &[Duration]) -> Option<u64> {
    let start = timestamps.len().saturating_sub(RATE_WINDOW);
    let window = timestamps.get(start..)?;
    let (first, last) = (window.first()?, window.last()?);
    let span = last.saturating_sub(*first).as_micros();
    let count = u128::try_from(window.len()).ok()?;
    let rate = count.saturating_mul(MILLI_PER_UNIT_MICROS).checked_div(span)?;
    Some(u64::try_from(rate).unwrap_or(u64::MAX))
}

/// Average rate over a whole run, scaled by 1000.
#[must_use]
pub fn average_rate_milli(requests: u64, elapsed: Duration) -> u64 {
    let rate = u128::from(requests)
        .saturating_mul(MILLI_PER_UNIT_MICROS)
        .checked_div(elapsed.as_micros())
        .unwrap_or(0);
    u64::try_from(rate).unwrap_or(u64::MAX)
}
