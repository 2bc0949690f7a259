use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::http::{PreparedRequest, Transport};
use crate::metrics::{AttemptRecord, RequestOutcome, RunStats};
use crate::providers::CapabilityRegistry;
use crate::template::{Template, resolve_template};

use super::control::StopSignal;
use super::observer::{ActivityEvent, RunObserver};

/// Everything one attempt needs; cloned into each worker.
#[derive(Clone)]
pub(crate) struct AttemptContext {
    pub template: Arc<Template>,
    pub registry: Arc<CapabilityRegistry>,
    pub transport: Arc<dyn Transport>,
    pub observer: Arc<dyn RunObserver>,
    pub stats: Arc<RunStats>,
}

/// Splits `request_count` over at most `thread_count` workers; the remainder
/// goes one request each to the first workers.
#[must_use]
pub fn worker_shares(request_count: u64, thread_count: usize) -> Vec<u64> {
    let threads = u64::try_from(thread_count).unwrap_or(u64::MAX);
    let workers = threads.min(request_count);
    let base = request_count.checked_div(workers).unwrap_or(0);
    let extra = request_count.checked_rem(workers).unwrap_or(0);
    (0..workers)
        .map(|index| {
            if index < extra {
                base.saturating_add(1)
            } else {
                base
            }
        })
        .collect()
}

/// Resolves, sends and records one attempt. Template and transport failures
/// are counted and logged, never returned.
pub(crate) async fn attempt_once(
    ctx: &AttemptContext,
    worker: usize,
    rng: &mut StdRng,
) -> AttemptRecord {
    let started = Instant::now();
    let prepared = resolve_template(&ctx.registry, &ctx.template, true, rng).and_then(|fields| {
        PreparedRequest::build(
            ctx.template.request_data.method,
            &ctx.template.request_data.url,
            &fields.headers,
            &fields.form_fields,
        )
    });

    let (outcome, sent_bytes, received_bytes) = match prepared {
        Err(err) => {
            warn!("thread:{} template error: {}", worker, err);
            (RequestOutcome::Failed, 0, 0)
        }
        Ok(request) => {
            let sent_bytes = request.sent_bytes;
            match ctx.transport.send(request).await {
                Ok(response) => (
                    RequestOutcome::Status(response.status),
                    sent_bytes,
                    response.received_bytes,
                ),
                Err(err) if err.is_timeout() => {
                    debug!("thread:{} {}", worker, err);
                    (RequestOutcome::TimedOut, sent_bytes, 0)
                }
                Err(err) => {
                    debug!("thread:{} {}", worker, err);
                    (RequestOutcome::Failed, sent_bytes, 0)
                }
            }
        }
    };

    let record = AttemptRecord {
        outcome,
        response_time: started.elapsed(),
        sent_bytes,
        received_bytes,
    };
    ctx.stats.record(record);
    ctx.observer.on_activity(&ActivityEvent {
        worker,
        outcome,
        sent_bytes,
        received_bytes,
        elapsed: record.response_time,
    });
    ctx.observer.on_stats_update(&ctx.stats);
    record
}

/// Sends this worker's share sequentially, sleeping `delay` between
/// attempts. Stops early once the stop signal is raised.
pub(crate) async fn run_worker(
    ctx: AttemptContext,
    worker: usize,
    share: u64,
    delay: Option<Duration>,
    mut stop: StopSignal,
    mut rng: StdRng,
) {
    let mut remaining = share;
    while remaining > 0 && !stop.is_stopped() {
        attempt_once(&ctx, worker, &mut rng).await;
        remaining = remaining.saturating_sub(1);
        if remaining == 0 || stop.is_stopped() {
            break;
        }
        if let Some(delay) = delay {
            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                () = stop.stopped() => break,
            }
        }
    }
    debug!("thread:{} finished with {} unsent", worker, remaining);
}
