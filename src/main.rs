mod app;
mod args;
mod attack;
mod config;
mod entry;
mod error;
mod http;
mod locale;
mod logger;
mod metrics;
mod providers;
mod shutdown_handlers;
mod template;

use std::process::ExitCode;

/// Exit status for errors raised before a run could start.
const CONFIGURATION_EXIT: u8 = 2;

fn main() -> ExitCode {
    match entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            if err.is_configuration() {
                ExitCode::from(CONFIGURATION_EXIT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
