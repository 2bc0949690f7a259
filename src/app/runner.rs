use std::sync::Arc;

use tracing::{info, warn};

use crate::args::LureArgs;
use crate::attack::{AttackDispatcher, LoggingObserver, RunState};
use crate::config::{Settings, apply_overrides};
use crate::error::AppResult;
use crate::http::{HttpTransport, build_client};
use crate::providers::CapabilityRegistry;
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::template::{Template, TemplateStore};

use super::progress::setup_progress_reporter;
use super::summary::{build_summary, print_summary};

/// Template named in the settings, or the first one in the store, with CLI
/// overrides applied.
///
/// # Errors
///
/// Returns `TemplateNotFound` or `NoTemplates`.
pub(crate) fn select_template(
    store: &TemplateStore,
    settings: &Settings,
    args: &LureArgs,
) -> AppResult<Template> {
    let mut template = match settings.template.as_deref() {
        Some(name) => store.get(name)?.clone(),
        None => store.first()?.clone(),
    };
    apply_overrides(&mut template, args);
    Ok(template)
}

/// Runs the selected template to completion or until interrupted, then
/// prints the summary.
///
/// # Errors
///
/// Returns configuration errors that prevent the run from starting.
pub(crate) async fn run_attack(args: &LureArgs, settings: &Settings) -> AppResult<RunState> {
    let store = TemplateStore::load(settings.templates_path.clone());
    let template = select_template(&store, settings, args)?;
    template.validate()?;

    let registry = CapabilityRegistry::build(template.locale()?.code)?;
    let client = build_client(&settings.client)?;
    let dispatcher = Arc::new(AttackDispatcher::new(
        registry,
        Arc::new(HttpTransport::new(client)),
        Arc::new(LoggingObserver),
        settings.dispatcher.clone(),
    ));

    let (shutdown_tx, _) = shutdown_channel();
    let signal_handle = {
        let dispatcher = Arc::clone(&dispatcher);
        setup_signal_shutdown_handler(&shutdown_tx, move || dispatcher.stop())
    };
    let planned = if args.test {
        1
    } else {
        template.config.request_count
    };
    let progress_handle = settings
        .progress
        .then(|| setup_progress_reporter(Arc::clone(&dispatcher), planned, &shutdown_tx));

    let result = dispatcher.run(&template, args.test).await;
    drop(shutdown_tx.send(()));
    if let Some(handle) = progress_handle {
        handle.await?;
    }
    signal_handle.await?;

    let report = result?;
    if report.abandoned > 0 {
        warn!("{} worker(s) were abandoned after the join grace", report.abandoned);
    }
    let summary = build_summary(&template, &report, args.test)?;
    print_summary(&summary, settings.output_format)?;
    info!("Run {}", report.state.as_str());
    Ok(report.state)
}
