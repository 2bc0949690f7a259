use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SCALE_THOUSAND: u64 = 1_000;
const SCALE_HUNDRED: u64 = 100;

/// `HH:MM:SS`; hours keep growing past 99.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total.checked_div(SECS_PER_HOUR).unwrap_or(0);
    let minutes = total
        .checked_rem(SECS_PER_HOUR)
        .and_then(|rest| rest.checked_div(SECS_PER_MINUTE))
        .unwrap_or(0);
    let seconds = total.checked_rem(SECS_PER_MINUTE).unwrap_or(0);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Renders a value stored multiplied by 100 with two decimals (`7000` → `70.00`).
#[must_use]
pub fn format_x100(value: u64) -> String {
    let whole = value.checked_div(SCALE_HUNDRED).unwrap_or(0);
    let frac = value.checked_rem(SCALE_HUNDRED).unwrap_or(0);
    format!("{whole}.{frac:02}")
}

/// Renders a value stored multiplied by 1000 with two decimals, truncated
/// (`1111` → `1.11`).
#[must_use]
pub fn format_milli(value: u64) -> String {
    let whole = value.checked_div(SCALE_THOUSAND).unwrap_or(0);
    let frac = value
        .checked_rem(SCALE_THOUSAND)
        .and_then(|rest| rest.checked_div(10))
        .unwrap_or(0);
    format!("{whole}.{frac:02}")
}

/// `numerator / denominator × 100`, stored ×100; zero when nothing was counted.
#[must_use]
pub fn rate_x100(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let scaled = u128::from(numerator)
        .saturating_mul(10_000)
        .checked_div(u128::from(denominator))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

#[must_use]
pub fn format_bytes_compact(bytes: u64) -> String {
    const KB: u64 = 1_000;
    const MB: u64 = 1_000_000;
    const GB: u64 = 1_000_000_000;

    let (unit, label) = if bytes >= GB {
        (GB, "GB")
    } else if bytes >= MB {
        (MB, "MB")
    } else if bytes >= KB {
        (KB, "KB")
    } else {
        return format!("{bytes}B");
    };
    let whole = bytes.checked_div(unit).unwrap_or(0);
    let frac = bytes
        .saturating_sub(whole.saturating_mul(unit))
        .saturating_mul(100)
        .checked_div(unit)
        .unwrap_or(0);
    format!("{whole}.{frac:02}{label}")
}
