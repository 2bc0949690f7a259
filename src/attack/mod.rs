//! The concurrent dispatch engine: worker pool, cooperative stop and the
//! observer callbacks fired while a run is live.
mod control;
mod dispatcher;
mod observer;
mod worker;


pub use control::{StopSignal, stop_channel};
pub use dispatcher::{
    AttackDispatcher, DEFAULT_JOIN_GRACE, DispatcherSettings, RunReport, RunState,
};
pub use observer::{ActivityEvent, LoggingObserver, RunObserver};
pub use worker::worker_shares;
