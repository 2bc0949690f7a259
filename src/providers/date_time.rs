use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

use crate::error::TemplateError;

use super::call::{BoundArgs, ParamSpec};
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "DATE_TIME",
    methods: &[
        GeneratorDescriptor {
            name: "date",
            params: &[ParamSpec::positional("pattern", "str", "%Y-%m-%d")],
            generate: date,
        },
        GeneratorDescriptor {
            name: "time",
            params: &[ParamSpec::positional("pattern", "str", "%H:%M:%S")],
            generate: time,
        },
        GeneratorDescriptor { name: "year", params: &[], generate: year },
        GeneratorDescriptor { name: "month", params: &[], generate: month },
        GeneratorDescriptor { name: "day_of_month", params: &[], generate: day_of_month },
        GeneratorDescriptor {
            name: "date_of_birth",
            params: &[
                ParamSpec::keyword("minimum_age", "int", "0"),
                ParamSpec::keyword("maximum_age", "int", "115"),
            ],
            generate: date_of_birth,
        },
        GeneratorDescriptor { name: "iso8601", params: &[], generate: iso8601 },
        GeneratorDescriptor { name: "unix_time", params: &[], generate: unix_time },
    ],
};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const MAX_AGE: usize = 200;

/// Parses `now`, `today`, or a signed offset such as `+10y`, `-3M` or
/// `+1y6M` relative to `now`. Years count 365 days and months 30.
///
/// # Errors
///
/// Returns a description of the problem when the text is not a known offset.
pub fn relative_datetime(text: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, String> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("now") || trimmed.eq_ignore_ascii_case("today") {
        return Ok(now);
    }
    let (negative, body) = match trimmed.chars().next() {
        Some('+') => (false, trimmed.get(1..).unwrap_or_default()),
        Some('-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(_) | None => (false, trimmed),
    };
    if body.is_empty() {
        return Err(format!("invalid relative date '{}'", text));
    }

    let mut seconds: i64 = 0;
    let mut digits = String::new();
    for ch in body.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let amount: i64 = digits
            .parse()
            .map_err(|err| format!("invalid relative date '{}': {}", text, err))?;
        let unit = match ch {
            'y' => SECONDS_PER_DAY.saturating_mul(365),
            'M' => SECONDS_PER_DAY.saturating_mul(30),
            'w' => SECONDS_PER_DAY.saturating_mul(7),
            'd' => SECONDS_PER_DAY,
            'h' => SECONDS_PER_HOUR,
            'm' => SECONDS_PER_MINUTE,
            's' => 1,
            other => return Err(format!("unknown unit '{}' in '{}'", other, text)),
        };
        seconds = seconds.saturating_add(amount.saturating_mul(unit));
        digits.clear();
    }
    if !digits.is_empty() {
        return Err(format!("missing unit in '{}'", text));
    }

    let offset = Duration::try_seconds(seconds)
        .ok_or_else(|| format!("offset out of range in '{}'", text))?;
    let shifted = if negative {
        now.checked_sub_signed(offset)
    } else {
        now.checked_add_signed(offset)
    };
    shifted.ok_or_else(|| format!("date out of range in '{}'", text))
}

/// Uniform instant in `[start, end]`, `start` when the range is empty.
pub fn random_between(
    ctx: &mut GenContext<'_>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let seconds = ctx.int_in(start.timestamp(), end.timestamp());
    DateTime::from_timestamp(seconds, 0).unwrap_or(start)
}

/// Formats through `write!` so an invalid pattern surfaces as an error.
///
/// # Errors
///
/// Returns `InvalidArgument` naming `param` when the pattern is invalid.
pub fn format_datetime<Tz>(
    value: &DateTime<Tz>,
    pattern: &str,
    method: &str,
    param: &str,
) -> Result<String, TemplateError>
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut output = String::new();
    write!(output, "{}", value.format(pattern)).map_err(|err| {
        TemplateError::invalid_argument(method, param, format!("invalid pattern '{}': {}", pattern, err))
    })?;
    Ok(output)
}

fn any_datetime(ctx: &mut GenContext<'_>) -> DateTime<Utc> {
    random_between(ctx, DateTime::UNIX_EPOCH, Utc::now())
}

fn date(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let pattern = args.text("pattern").unwrap_or_default();
    let value = any_datetime(ctx);
    Ok(format_datetime(&value, &pattern, args.method(), "pattern")?.into())
}

fn time(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    date(ctx, args)
}

fn year(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(any_datetime(ctx).year().to_string().into())
}

fn month(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(format!("{:02}", any_datetime(ctx).month()).into())
}

fn day_of_month(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(format!("{:02}", any_datetime(ctx).day()).into())
}

fn years_before(today: NaiveDate, years: usize) -> Option<NaiveDate> {
    let months = u32::try_from(years).ok()?.checked_mul(12)?;
    today.checked_sub_months(Months::new(months))
}

/// Birth date for an age in `[minimum_age, maximum_age]` as of today.
fn date_of_birth(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let minimum_age = args.count_max("minimum_age", MAX_AGE)?;
    let maximum_age = args.count_max("maximum_age", MAX_AGE)?;
    if maximum_age < minimum_age {
        return Err(TemplateError::invalid_argument(
            args.method(),
            "maximum_age",
            "must be >= minimum_age",
        ));
    }
    let today = Utc::now().date_naive();
    let out_of_range =
        || TemplateError::invalid_argument(args.method(), "maximum_age", "date out of range");
    let latest = years_before(today, minimum_age).ok_or_else(out_of_range)?;
    let earliest = years_before(today, maximum_age.saturating_add(1))
        .and_then(|date| date.succ_opt())
        .ok_or_else(out_of_range)?;
    let span = latest.signed_duration_since(earliest).num_days();
    let offset = Duration::try_days(ctx.int_in(0, span)).ok_or_else(out_of_range)?;
    let birth = earliest
        .checked_add_signed(offset)
        .ok_or_else(out_of_range)?;
    Ok(birth.format("%Y-%m-%d").to_string().into())
}

fn iso8601(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(any_datetime(ctx)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
        .into())
}

fn unix_time(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(Scalar::Int(any_datetime(ctx).timestamp()))
}
