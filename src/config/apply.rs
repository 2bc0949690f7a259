use std::path::PathBuf;

use serde_json::Value;

use crate::args::{LogLevel, LureArgs, OutputFormat};
use crate::attack::DispatcherSettings;
use crate::error::ConfigError;
use crate::http::ClientSettings;
use crate::template::{DEFAULT_TEMPLATES_PATH, Template};

use super::types::ConfigFile;

/// Process-wide settings after merging CLI flags, the config file and
/// built-in defaults, in that order of precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub templates_path: PathBuf,
    pub template: Option<String>,
    pub log_level: LogLevel,
    pub log_file: Option<PathBuf>,
    pub client: ClientSettings,
    pub dispatcher: DispatcherSettings,
    pub progress: bool,
    pub output_format: OutputFormat,
}

/// Merges CLI arguments over the config file.
///
/// # Errors
///
/// Returns an error for an unknown log level or an invalid duration.
pub fn apply_config(args: &LureArgs, config: Option<&ConfigFile>) -> Result<Settings, ConfigError> {
    let empty = ConfigFile::default();
    let file = config.unwrap_or(&empty);

    let templates_path = args
        .templates
        .clone()
        .or_else(|| file.templates_path.clone())
        .unwrap_or_else(|| DEFAULT_TEMPLATES_PATH.to_owned());

    let log_level = if args.verbose {
        LogLevel::Debug
    } else {
        match args.log_level.as_deref().or(file.log_level.as_deref()) {
            Some(level) => level.parse()?,
            None => LogLevel::default(),
        }
    };

    let mut client = ClientSettings::default();
    if let Some(timeout) = args.request_timeout {
        client.request_timeout = timeout;
    } else if let Some(timeout) = file.request_timeout.as_ref() {
        client.request_timeout = timeout.to_duration()?;
    }
    client.follow_redirects = args.follow_redirects || file.follow_redirects.unwrap_or(false);

    let mut dispatcher = DispatcherSettings::default();
    if let Some(grace) = args.join_grace {
        dispatcher.join_grace = grace;
    } else if let Some(grace) = file.join_grace.as_ref() {
        dispatcher.join_grace = grace.to_duration()?;
    }

    Ok(Settings {
        templates_path: PathBuf::from(templates_path),
        template: args.template.clone().or_else(|| file.template.clone()),
        log_level,
        log_file: args
            .log_file
            .clone()
            .or_else(|| file.log_file.clone())
            .map(PathBuf::from),
        client,
        dispatcher,
        progress: !args.no_progress && file.progress.unwrap_or(true),
        output_format: args
            .output_format
            .or(file.output_format)
            .unwrap_or_default(),
    })
}

/// Applies per-run CLI overrides (target, counts, region, extra fields) to a
/// template copy.
pub fn apply_overrides(template: &mut Template, args: &LureArgs) {
    if let Some(url) = args.url.as_ref() {
        template.request_data.url.clone_from(url);
    }
    if let Some(method) = args.method {
        template.request_data.method = method;
    }
    if let Some(requests) = args.requests {
        template.config.request_count = requests.get();
    }
    if let Some(threads) = args.threads {
        template.config.thread_count = threads.get();
    }
    if let Some(delay) = args.delay {
        template.config.request_delay = delay;
    }
    if let Some(region) = args.region.as_ref() {
        template.config.data_region.clone_from(region);
    }
    if let Some(complexity) = args.password_complexity {
        template.config.password_complexity = complexity;
    }
    for (name, value) in &args.headers {
        template
            .headers
            .insert(name.clone(), Value::String(value.clone()));
    }
    for (name, value) in &args.fields {
        template
            .form_fields
            .insert(name.clone(), Value::String(value.clone()));
    }
}
