use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::error::ConfigError;
use crate::http::Transport;
use crate::metrics::RunStats;
use crate::providers::CapabilityRegistry;
use crate::template::Template;

use super::control::{StopSignal, stop_channel};
use super::observer::RunObserver;
use super::worker::{AttemptContext, attempt_once, run_worker, worker_shares};

pub const DEFAULT_JOIN_GRACE: Duration = Duration::from_secs(5);

/// Lifecycle of the dispatcher's current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Stopped,
}

impl RunState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Stopped => "stopped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherSettings {
    /// How long a stopped run waits for workers before abandoning them.
    pub join_grace: Duration,
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self {
            join_grace: DEFAULT_JOIN_GRACE,
        }
    }
}

/// Result of one call to [`AttackDispatcher::run`].
#[derive(Debug, Clone)]
pub struct RunReport {
    pub state: RunState,
    pub stats: Arc<RunStats>,
    pub workers: usize,
    /// Workers still running when the join grace ran out.
    pub abandoned: usize,
}

/// Run state plus the stop sender of the current run. Each run gets its own
/// channel, so workers of an earlier run never observe a reset flag.
struct RunControl {
    state: RunState,
    stop_tx: watch::Sender<bool>,
}

/// Owns the worker pool of a run, the shared stats and the stop flag.
pub struct AttackDispatcher {
    registry: RwLock<Arc<CapabilityRegistry>>,
    transport: Arc<dyn Transport>,
    observer: Arc<dyn RunObserver>,
    stats: RwLock<Arc<RunStats>>,
    control: Mutex<RunControl>,
    settings: DispatcherSettings,
}

fn read_arc<T>(lock: &RwLock<Arc<T>>) -> Arc<T> {
    Arc::clone(&lock.read().unwrap_or_else(PoisonError::into_inner))
}

fn replace_arc<T>(lock: &RwLock<Arc<T>>, value: Arc<T>) {
    *lock.write().unwrap_or_else(PoisonError::into_inner) = value;
}

impl AttackDispatcher {
    #[must_use]
    pub fn new(
        registry: CapabilityRegistry,
        transport: Arc<dyn Transport>,
        observer: Arc<dyn RunObserver>,
        settings: DispatcherSettings,
    ) -> Self {
        let (stop_tx, _) = stop_channel();
        Self {
            registry: RwLock::new(Arc::new(registry)),
            transport,
            observer,
            stats: RwLock::new(Arc::new(RunStats::new())),
            control: Mutex::new(RunControl {
                state: RunState::Idle,
                stop_tx,
            }),
            settings,
        }
    }

    fn control(&self) -> MutexGuard<'_, RunControl> {
        self.control.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.control().state
    }

    fn set_state(&self, state: RunState) {
        self.control().state = state;
    }

    /// Stats of the current or most recent run.
    #[must_use]
    pub fn stats(&self) -> Arc<RunStats> {
        read_arc(&self.stats)
    }

    #[must_use]
    pub fn registry(&self) -> Arc<CapabilityRegistry> {
        read_arc(&self.registry)
    }

    /// Requests a cooperative stop. Returns false, and does nothing, when no
    /// run is in progress.
    pub fn stop(&self) -> bool {
        let control = self.control();
        if control.state != RunState::Running {
            return false;
        }
        if !control.stop_tx.send_replace(true) {
            info!("Stop requested; waiting for workers to finish their current request");
        }
        true
    }

    /// Rebuilds the registry when the template's region maps to another
    /// locale than the one currently loaded.
    fn ensure_registry(&self, template: &Template) -> Result<Arc<CapabilityRegistry>, ConfigError> {
        let locale = template.locale()?;
        let current = self.registry();
        if current.locale().code == locale.code {
            return Ok(current);
        }
        info!("Switching data locale {} -> {}", current.locale().code, locale.code);
        let rebuilt = Arc::new(CapabilityRegistry::build(locale.code)?);
        replace_arc(&self.registry, Arc::clone(&rebuilt));
        Ok(rebuilt)
    }

    /// Marks the dispatcher running and opens the stop channel of the new
    /// run. The previous run's sender is dropped with its last value intact.
    fn begin(&self) -> Result<StopSignal, ConfigError> {
        let mut control = self.control();
        if control.state == RunState::Running {
            return Err(ConfigError::RunInProgress);
        }
        let (stop_tx, stop) = stop_channel();
        control.state = RunState::Running;
        control.stop_tx = stop_tx;
        Ok(stop)
    }

    /// Runs `template`. In test mode exactly one attempt is made on the
    /// calling task; otherwise `min(thread_count, request_count)` workers
    /// share the request count.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the template is invalid, its
    /// locale cannot be loaded, or another run is in progress. Per-attempt
    /// failures are only counted.
    pub async fn run(&self, template: &Template, test: bool) -> Result<RunReport, ConfigError> {
        template.validate()?;
        let delay = template.config.delay()?;
        let stop = self.begin()?;
        let registry = match self.ensure_registry(template) {
            Ok(registry) => registry,
            Err(err) => {
                self.set_state(RunState::Idle);
                return Err(err);
            }
        };

        let stats = Arc::new(RunStats::new());
        replace_arc(&self.stats, Arc::clone(&stats));

        let ctx = AttemptContext {
            template: Arc::new(template.clone()),
            registry,
            transport: Arc::clone(&self.transport),
            observer: Arc::clone(&self.observer),
            stats: Arc::clone(&stats),
        };

        let planned = if test { 1 } else { template.config.request_count };
        let (workers, abandoned) = if test {
            info!(
                "Sending one test request: {} {}",
                template.request_data.method.as_str(),
                template.request_data.url
            );
            attempt_once(&ctx, 0, &mut StdRng::from_entropy()).await;
            (0, 0)
        } else {
            self.run_workers(ctx, template, delay, &stop).await
        };

        if !stats.finish() {
            warn!("Run end time was already set");
        }
        // A stop that arrives after every attempt was made changes nothing.
        let final_state = if stop.is_stopped() && stats.requests_sent() < planned {
            RunState::Stopped
        } else {
            RunState::Completed
        };
        self.set_state(final_state);
        self.observer.on_finish_run(&stats, final_state);
        Ok(RunReport {
            state: final_state,
            stats,
            workers,
            abandoned,
        })
    }

    async fn run_workers(
        &self,
        ctx: AttemptContext,
        template: &Template,
        delay: Option<Duration>,
        stop: &StopSignal,
    ) -> (usize, usize) {
        let shares = worker_shares(template.config.request_count, template.config.thread_count);
        info!(
            "Starting {} workers for {} requests against {} {}",
            shares.len(),
            template.config.request_count,
            template.request_data.method.as_str(),
            template.request_data.url
        );
        let mut handles: Vec<JoinHandle<()>> = shares
            .iter()
            .enumerate()
            .map(|(worker, share)| {
                tokio::spawn(run_worker(
                    ctx.clone(),
                    worker,
                    *share,
                    delay,
                    stop.clone(),
                    StdRng::from_entropy(),
                ))
            })
            .collect();
        let workers = handles.len();

        let mut stop_watch = stop.clone();
        let stopped_early = tokio::select! {
            () = wait_for_workers(&mut handles) => false,
            () = stop_watch.stopped() => true,
        };
        if !stopped_early {
            return (workers, 0);
        }

        let grace = self.settings.join_grace;
        if tokio::time::timeout(grace, wait_for_workers(&mut handles))
            .await
            .is_ok()
        {
            return (workers, 0);
        }
        let abandoned = handles.iter().filter(|handle| !handle.is_finished()).count();
        warn!(
            "{} worker(s) still busy {}ms after stop; abandoning them",
            abandoned,
            grace.as_millis()
        );
        (workers, abandoned)
    }
}

/// Awaits every handle that has not finished yet. Safe to call again after
/// being cancelled: completed handles are skipped, never polled twice.
async fn wait_for_workers(handles: &mut [JoinHandle<()>]) {
    for handle in handles.iter_mut() {
        if handle.is_finished() {
            continue;
        }
        if let Err(err) = handle.await {
            error!("Worker task failed: {}", err);
        }
    }
}
