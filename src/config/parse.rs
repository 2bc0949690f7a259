use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;

/// Parses `10`, `500ms`, `2m` or compound `1h30m` durations. A bare number is
/// seconds; zero is rejected.
pub(crate) fn parse_duration_value(value: &str) -> Result<Duration, String> {
    let text = value.trim();
    if text.is_empty() {
        return Err("Duration must not be empty.".to_owned());
    }

    let total = if let Ok(secs) = text.parse::<u64>() {
        Duration::from_secs(secs)
    } else {
        let mut total = Duration::ZERO;
        let mut rest = text;
        while !rest.is_empty() {
            let digits = rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits == 0 {
                return Err(format!("Invalid duration '{}'.", text));
            }
            let (number, tail) = rest.split_at(digits);
            let unit_len = tail
                .find(|ch: char| ch.is_ascii_digit())
                .unwrap_or(tail.len());
            let (unit, next) = tail.split_at(unit_len);
            let number: u64 = number
                .parse()
                .map_err(|err| format!("Invalid duration '{}': {}", text, err))?;
            total = total
                .checked_add(unit_duration(number, unit.trim())?)
                .ok_or_else(|| "Duration overflow.".to_owned())?;
            rest = next;
        }
        total
    };

    if total.is_zero() {
        return Err("Duration must be > 0.".to_owned());
    }
    Ok(total)
}

fn unit_duration(number: u64, unit: &str) -> Result<Duration, String> {
    let overflow = || "Duration overflow.".to_owned();
    match unit {
        "ms" => Ok(Duration::from_millis(number)),
        "s" => Ok(Duration::from_secs(number)),
        "m" => number
            .checked_mul(SECS_PER_MINUTE)
            .map(Duration::from_secs)
            .ok_or_else(overflow),
        "h" => number
            .checked_mul(SECS_PER_HOUR)
            .map(Duration::from_secs)
            .ok_or_else(overflow),
        other => Err(format!("Invalid duration unit '{}'.", other)),
    }
}
