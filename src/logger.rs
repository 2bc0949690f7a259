use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::args::LogLevel;
use crate::error::AppResult;

/// Filter from `LUREBUSTER_LOG`, then `RUST_LOG`, then `level`.
fn build_filter(level: LogLevel) -> EnvFilter {
    std::env::var("LUREBUSTER_LOG")
        .or_else(|_err| std::env::var("RUST_LOG"))
        .map_or_else(
            |_err| EnvFilter::new(level.as_filter()),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_err| EnvFilter::new(level.as_filter())),
        )
}

/// Installs the global subscriber: stderr always, plus an appended log file
/// when `log_file` is set. A second call leaves the first subscriber in place.
///
/// # Errors
///
/// Returns an error when the log file cannot be opened.
pub fn init_logging(level: LogLevel, log_file: Option<&Path>) -> AppResult<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let result = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();

    if let Err(err) = result {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() -> AppResult<()> {
        init_logging(LogLevel::Info, None)?;
        init_logging(LogLevel::Debug, None)?;
        Ok(())
    }

    #[test]
    fn log_file_is_created() -> Result<(), String> {
        let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
        let path = dir.path().join("lurebuster.log");
        init_logging(LogLevel::Warning, Some(&path)).map_err(|err| err.to_string())?;
        if !path.exists() {
            return Err("Log file was not created".to_owned());
        }
        Ok(())
    }
}
