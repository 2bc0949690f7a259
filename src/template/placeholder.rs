use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TemplateError;
use crate::providers::{CallArgs, Scalar};

static TOKEN: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"\{\{.*?\}\}"));
static PROVIDER: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^([A-Z]+(?:_[A-Z]+)*)"));
static METHOD: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[A-Z_0-9]+_([a-z_0-9]+)_*(?:\((.*)\))*"));

fn compiled(pattern: &'static Lazy<Result<Regex, regex::Error>>) -> Result<&'static Regex, TemplateError> {
    Lazy::force(pattern)
        .as_ref()
        .map_err(|err| TemplateError::Syntax {
            reason: err.to_string(),
        })
}

/// Regex matching one placeholder token, shortest span first.
///
/// # Errors
///
/// Returns `Syntax` if the pattern failed to compile.
pub fn token_pattern() -> Result<&'static Regex, TemplateError> {
    compiled(&TOKEN)
}

/// A placeholder split into its generator call.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPlaceholder {
    pub provider: String,
    pub method: String,
    pub args: CallArgs,
}

/// Parses `{{PROVIDER_method}}` or `{{PROVIDER_method_(args)}}`.
///
/// # Errors
///
/// Returns `UnknownPlaceholder` when no provider prefix is present and
/// `MalformedPlaceholder` when the method or argument list cannot be read.
pub fn parse_placeholder(token: &str) -> Result<ParsedPlaceholder, TemplateError> {
    let inner = token
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .unwrap_or(token);

    let provider = compiled(&PROVIDER)?
        .captures(inner)
        .and_then(|caps| caps.get(1))
        .map(|found| found.as_str().to_owned())
        .ok_or_else(|| TemplateError::UnknownPlaceholder {
            token: token.to_owned(),
        })?;

    let malformed = || TemplateError::MalformedPlaceholder {
        token: token.to_owned(),
    };
    let caps = compiled(&METHOD)?.captures(inner).ok_or_else(malformed)?;
    let method = caps
        .get(1)
        .map(|found| found.as_str().trim_matches('_').to_owned())
        .filter(|name| !name.is_empty())
        .ok_or_else(malformed)?;
    let args = match caps.get(2) {
        Some(raw) => parse_arguments(raw.as_str()).ok_or_else(malformed)?,
        None => CallArgs::default(),
    };

    Ok(ParsedPlaceholder {
        provider,
        method,
        args,
    })
}

/// Splits `a, b, key=value` into positional and keyword arguments. Whitespace
/// is dropped and each value coerced to int, then float, then text. `None`
/// when a segment is empty.
#[must_use]
pub fn parse_arguments(raw: &str) -> Option<CallArgs> {
    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut args = CallArgs::default();
    if compact.is_empty() {
        return Some(args);
    }
    for segment in compact.split(',') {
        if segment.is_empty() {
            return None;
        }
        match segment.split_once('=') {
            Some((name, value)) => {
                if name.is_empty() {
                    return None;
                }
                args.keyword.push((name.to_owned(), coerce(value)));
            }
            None => args.positional.push(coerce(segment)),
        }
    }
    Some(args)
}

fn coerce(raw: &str) -> Scalar {
    let unquoted = ['\'', '"']
        .iter()
        .find_map(|quote| {
            raw.strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        });
    match unquoted {
        Some(text) => Scalar::Str(text.to_owned()),
        None => Scalar::coerce(raw),
    }
}
