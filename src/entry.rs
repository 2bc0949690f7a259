use clap::Parser;

use crate::app;
use crate::args::LureArgs;
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn run() -> AppResult<()> {
    let args = LureArgs::parse();
    let config = load_config(args.config.as_deref())?;
    let settings = apply_config(&args, config.as_ref())?;

    crate::logger::init_logging(settings.log_level, settings.log_file.as_deref())?;
    if let Some(path) = args.config.as_deref() {
        tracing::debug!("Loaded config from {}", path);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuild { source: err }))?;

    runtime.block_on(app::execute(args, settings))
}
