use std::time::Duration;

use super::types::{PositiveU64, PositiveUsize};
use crate::config::parse_duration_value;
use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn parse_header(s: &str) -> Result<(String, String), ValidationError> {
    match s.split_once(':') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_owned(), value.trim().to_owned()))
        }
        Some(_) | None => Err(ValidationError::InvalidHeaderFormat {
            value: s.to_owned(),
        }),
    }
}

pub(crate) fn parse_form_field(s: &str) -> Result<(String, String), ValidationError> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.to_owned()))
        }
        Some(_) | None => Err(ValidationError::InvalidFormField {
            value: s.to_owned(),
        }),
    }
}

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

pub(super) fn parse_delay(s: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidDelay {
        value: s.to_owned(),
    };
    let value: f64 = s.trim().parse().map_err(|_err: std::num::ParseFloatError| invalid())?;
    if !value.is_finite() || value.is_sign_negative() {
        return Err(invalid());
    }
    Ok(value)
}

pub(crate) fn parse_region(s: &str) -> Result<String, ValidationError> {
    let region = s.trim().to_ascii_uppercase();
    if region.len() == 2 && region.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Ok(region)
    } else {
        Err(ValidationError::InvalidRegion {
            value: s.to_owned(),
        })
    }
}

pub(super) fn parse_duration_arg(s: &str) -> Result<Duration, String> {
    parse_duration_value(s)
}
