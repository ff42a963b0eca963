//! Dashboard Data Sync
//!
//! Polls the backend on activation and then on a fixed interval. Each cycle
//! issues the three reads concurrently and applies them only when all three
//! succeed. A failed cycle is logged and leaves the previous data in place;
//! the next tick is the retry.
//!
//! Cycles are not serialized: a tick never waits for an in-flight cycle, so
//! whichever cycle resolves last determines what is shown.

mod state;

pub use state::{CycleData, DashboardState};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::backend::{BackendError, DashboardSource};

/// Configuration for the refresh loop
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Time between cycle starts
    pub interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
        }
    }
}

/// Fetch the three dashboard reads concurrently
pub async fn fetch_cycle(source: &dyn DashboardSource) -> Result<CycleData, BackendError> {
    let (complaints, sos, recent) = tokio::try_join!(
        source.complaint_stats(),
        source.sos_stats(),
        source.recent_complaints()
    )?;

    Ok(CycleData {
        complaints,
        sos,
        recent,
    })
}

/// Run one refresh cycle and apply its outcome to `state`
pub async fn run_cycle(source: &dyn DashboardSource, state: &RwLock<DashboardState>) {
    let start = std::time::Instant::now();

    match fetch_cycle(source).await {
        Ok(data) => {
            let recent = data.recent.len();
            state.write().await.apply_success(data, Utc::now());
            tracing::debug!(
                source = source.name(),
                recent,
                duration_ms = start.elapsed().as_millis() as u64,
                "Dashboard refresh completed"
            );
        }
        Err(e) => {
            tracing::warn!(source = source.name(), error = %e, "Dashboard refresh failed");
            state.write().await.apply_failure(e.to_string());
        }
    }
}

struct Shared {
    source: Arc<dyn DashboardSource>,
    state: RwLock<DashboardState>,
    stopped: AtomicBool,
}

/// Starts the recurring refresh task
pub struct DashboardSync;

impl DashboardSync {
    /// Spawn the refresh loop. The first cycle starts immediately.
    pub fn start(source: Arc<dyn DashboardSource>, config: SyncConfig) -> SyncHandle {
        let shared = Arc::new(Shared {
            source,
            state: RwLock::new(DashboardState::default()),
            stopped: AtomicBool::new(false),
        });

        tracing::info!(
            source = shared.source.name(),
            interval_secs = config.interval.as_secs(),
            "Starting dashboard refresh"
        );

        let task = tokio::spawn(refresh_loop(Arc::clone(&shared), config.interval));

        SyncHandle { shared, task }
    }
}

async fn refresh_loop(shared: Arc<Shared>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Dropping this set (when the loop is aborted) aborts every in-flight cycle
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let shared = Arc::clone(&shared);
                in_flight.spawn(async move {
                    if shared.stopped.load(Ordering::Acquire) {
                        return;
                    }
                    run_cycle(shared.source.as_ref(), &shared.state).await;
                });
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(e) = joined {
                    if e.is_panic() {
                        tracing::error!(error = %e, "Dashboard refresh cycle panicked");
                    }
                }
            }
        }
    }
}

/// Owner of a running refresh loop
///
/// Dropping the handle stops the loop: no cycle issues a request after
/// that point, and in-flight cycles are aborted.
pub struct SyncHandle {
    shared: Arc<Shared>,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Clone of the current dashboard state
    pub async fn snapshot(&self) -> DashboardState {
        self.shared.state.read().await.clone()
    }

    /// Stop the loop and wait for it to wind down
    pub async fn stop(mut self) {
        self.halt();
        let _ = (&mut self.task).await;
    }

    fn halt(&self) {
        if !self.shared.stopped.swap(true, Ordering::AcqRel) {
            tracing::debug!("Dashboard refresh stopped");
        }
        self.task.abort();
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.halt();
    }
}
