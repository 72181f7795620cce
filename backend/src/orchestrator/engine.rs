//! Orchestrator Engine - refresh state machine
//!
//! Owns the published [`DashboardSnapshot`] and every operation that replaces
//! it:
//! - Refresh (simulated latency, then regenerate all datasets)
//! - Timeframe selection (regenerate the sales series)
//! - Order reload (regenerate the order list)
//!
//! # Architecture
//!
//! ```text
//!            start_refresh()                 delay elapsed
//!   Idle ──────────────────────▶ Refreshing ──────────────▶ Idle
//!    ▲                              │   (series + categories + orders
//!    │        dispose()             │    regenerated, snapshot swapped)
//!    └──────────────────────────────┘
//!              (pending task aborted, no swap)
//! ```
//!
//! Regeneration runs synchronously under the state lock once the delay has
//! elapsed, so a consumer sees either the previous snapshot or the new one.
//!
//! # Example
//!
//! ```rust
//! use sales_dashboard_core_rs::orchestrator::{ManualScheduler, RefreshOrchestrator, RefreshState};
//! use sales_dashboard_core_rs::{DashboardConfig, RngManager};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(async {
//!     let scheduler = ManualScheduler::new();
//!     let mut dashboard = RefreshOrchestrator::builder(DashboardConfig::default())
//!         .with_rng(RngManager::new(42))
//!         .with_scheduler(scheduler.clone())
//!         .build()
//!         .unwrap();
//!
//!     dashboard.start_refresh().unwrap();
//!     assert_eq!(dashboard.state(), RefreshState::Refreshing);
//!
//!     scheduler.fire();
//!     dashboard.wait_for_refresh().await.unwrap();
//!     assert_eq!(dashboard.state(), RefreshState::Idle);
//!     assert_eq!(dashboard.snapshot().generation, 1);
//! });
//! ```

use crate::config::DashboardConfig;
use crate::core::time::{Clock, SystemClock};
use crate::generators::{generate_category_mix, generate_orders, generate_sales_series, GeneratorError};
use crate::models::{DashboardEvent, EventLog, Timeframe};
use crate::orchestrator::scheduler::{Scheduler, TokioScheduler};
use crate::orchestrator::snapshot::DashboardSnapshot;
use crate::rng::{NumberSource, RngManager};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

// ============================================================================
// Public Types
// ============================================================================

/// Errors surfaced by the orchestrator
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Dashboard has been disposed")]
    Disposed,

    #[error("Refresh requires a running tokio runtime")]
    NoRuntime,

    #[error("Refresh task failed: {0}")]
    RefreshTask(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Refresh lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RefreshState {
    Idle,
    Refreshing,
}

/// Result of requesting a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Idle -> Refreshing; a completion is now pending
    Started,
    /// A refresh was already pending; nothing changed
    AlreadyRefreshing,
}

// ============================================================================
// Shared State
// ============================================================================

/// Mutable state guarded by [`Shared::state`]. Never held across an `.await`.
struct DashboardState {
    phase: RefreshState,
    timeframe: Timeframe,
    generation: u64,
    disposed: bool,
    rng: Box<dyn NumberSource + Send>,
    events: EventLog,
}

/// State reachable from both the orchestrator and its pending refresh task.
struct Shared {
    state: Mutex<DashboardState>,
    snapshot_tx: watch::Sender<Arc<DashboardSnapshot>>,
    clock: Arc<dyn Clock>,
    order_count: usize,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current(&self) -> Arc<DashboardSnapshot> {
        Arc::clone(&self.snapshot_tx.borrow())
    }

    /// Called by the refresh task once the delay has elapsed.
    fn complete_refresh(&self) {
        let mut state = self.lock();
        if state.disposed {
            debug!("refresh completion after disposal ignored");
            return;
        }

        let next = state.generation + 1;
        let now = self.clock.now();
        match build_snapshot(&mut state, self.clock.as_ref(), self.order_count, next) {
            Ok(snapshot) => {
                let days = snapshot.timeframe.days();
                let order_count = snapshot.orders.len();
                state.generation = next;
                state.phase = RefreshState::Idle;
                state.events.log(DashboardEvent::RefreshCompleted {
                    at: now,
                    generation: next,
                    days,
                    order_count,
                });
                self.snapshot_tx.send_replace(Arc::new(snapshot));
                info!(generation = next, days, order_count, "refresh completed");
            }
            Err(e) => {
                let generation = state.generation;
                state.phase = RefreshState::Idle;
                state.events.log(DashboardEvent::RefreshFailed {
                    at: now,
                    generation,
                    reason: e.to_string(),
                });
                error!(generation, error = %e, "refresh failed; previous snapshot kept");
            }
        }
    }

    /// Called when the refresh task goes away without completing (runtime
    /// shutdown or a panic inside the delay).
    fn abandon_refresh(&self, panicked: bool) {
        let mut state = self.lock();
        if state.disposed || state.phase != RefreshState::Refreshing {
            return;
        }

        let generation = state.generation;
        let at = self.clock.now();
        state.phase = RefreshState::Idle;
        if panicked {
            state.events.log(DashboardEvent::RefreshFailed {
                at,
                generation,
                reason: "refresh task panicked".to_string(),
            });
            error!(generation, "refresh task panicked; previous snapshot kept");
        } else {
            state.events.log(DashboardEvent::RefreshCancelled { at, generation });
            warn!(generation, "refresh task dropped before completion; previous snapshot kept");
        }
    }
}

/// Owned by the refresh task. Returns the orchestrator to Idle if the task is
/// dropped or unwinds before the completion runs.
struct RefreshGuard {
    shared: Arc<Shared>,
    completed: bool,
}

impl RefreshGuard {
    fn new(shared: Arc<Shared>) -> Self {
        Self {
            shared,
            completed: false,
        }
    }

    fn complete(mut self) {
        self.shared.complete_refresh();
        self.completed = true;
    }
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        if !self.completed {
            self.shared.abandon_refresh(std::thread::panicking());
        }
    }
}

/// Regenerate every dataset for `generation`.
fn build_snapshot(
    state: &mut DashboardState,
    clock: &dyn Clock,
    order_count: usize,
    generation: u64,
) -> Result<DashboardSnapshot, GeneratorError> {
    let series = generate_sales_series(state.timeframe.days() as usize, clock, &mut state.rng)?;
    let categories = generate_category_mix();
    let orders = generate_orders(order_count, clock, &mut state.rng)?;
    Ok(DashboardSnapshot::new(
        generation,
        clock.now(),
        state.timeframe,
        series,
        categories,
        orders,
    ))
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`RefreshOrchestrator`]; unset collaborators get production defaults.
pub struct RefreshOrchestratorBuilder {
    config: DashboardConfig,
    rng: Option<Box<dyn NumberSource + Send>>,
    clock: Option<Arc<dyn Clock>>,
    scheduler: Option<Arc<dyn Scheduler>>,
}

impl RefreshOrchestratorBuilder {
    /// Use `rng` instead of an [`RngManager`] seeded from `config.rng_seed`.
    pub fn with_rng<R: NumberSource + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn with_scheduler<S: Scheduler + 'static>(mut self, scheduler: S) -> Self {
        self.scheduler = Some(Arc::new(scheduler));
        self
    }

    /// Validate the config and generate the initial snapshot (generation 0).
    pub fn build(self) -> Result<RefreshOrchestrator, DashboardError> {
        self.config.validate()?;

        let rng = match self.rng {
            Some(rng) => rng,
            None => match self.config.rng_seed {
                Some(seed) => Box::new(RngManager::new(seed)) as Box<dyn NumberSource + Send>,
                None => Box::new(RngManager::from_entropy()),
            },
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);
        let scheduler = self
            .scheduler
            .unwrap_or_else(|| Arc::new(TokioScheduler) as Arc<dyn Scheduler>);

        let mut state = DashboardState {
            phase: RefreshState::Idle,
            timeframe: self.config.default_timeframe,
            generation: 0,
            disposed: false,
            rng,
            events: EventLog::with_capacity(self.config.event_log_capacity),
        };

        let initial = build_snapshot(&mut state, clock.as_ref(), self.config.order_count, 0)?;
        let (snapshot_tx, _) = watch::channel(Arc::new(initial));
        let shared = Shared {
            state: Mutex::new(state),
            snapshot_tx,
            clock,
            order_count: self.config.order_count,
        };

        info!(
            timeframe = %self.config.default_timeframe,
            order_count = self.config.order_count,
            refresh_delay_ms = self.config.refresh_delay_ms,
            "dashboard initialized"
        );

        Ok(RefreshOrchestrator {
            config: self.config,
            shared: Arc::new(shared),
            scheduler,
            pending: None,
        })
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Sequences refreshes and publishes immutable dashboard snapshots.
///
/// Dropping the orchestrator disposes it.
pub struct RefreshOrchestrator {
    config: DashboardConfig,
    shared: Arc<Shared>,
    scheduler: Arc<dyn Scheduler>,
    pending: Option<JoinHandle<()>>,
}

impl RefreshOrchestrator {
    pub fn builder(config: DashboardConfig) -> RefreshOrchestratorBuilder {
        RefreshOrchestratorBuilder {
            config,
            rng: None,
            clock: None,
            scheduler: None,
        }
    }

    /// Build with system clock, tokio timer and `config.rng_seed`.
    pub fn new(config: DashboardConfig) -> Result<Self, DashboardError> {
        Self::builder(config).build()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<DashboardSnapshot> {
        self.shared.current()
    }

    /// Receiver notified on every snapshot replacement.
    ///
    /// Do not hold a `borrow()` of the receiver while calling into the
    /// orchestrator.
    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardSnapshot>> {
        self.shared.snapshot_tx.subscribe()
    }

    pub fn state(&self) -> RefreshState {
        self.shared.lock().phase
    }

    pub fn timeframe(&self) -> Timeframe {
        self.shared.lock().timeframe
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock().disposed
    }

    /// Copy of the retained events, oldest first. The log keeps at most
    /// `config.event_log_capacity` entries.
    pub fn events(&self) -> Vec<DashboardEvent> {
        self.shared.lock().events.iter().cloned().collect()
    }

    /// The last `n` retained events, oldest first
    pub fn recent_events(&self, n: usize) -> Vec<DashboardEvent> {
        self.shared.lock().events.recent(n)
    }

    /// Number of retained events, without copying them
    pub fn event_count(&self) -> usize {
        self.shared.lock().events.len()
    }

    /// Begin a refresh cycle.
    ///
    /// While a refresh is pending this is a no-op returning
    /// [`RefreshOutcome::AlreadyRefreshing`].
    ///
    /// # Errors
    ///
    /// - [`DashboardError::Disposed`] after [`dispose`](Self::dispose)
    /// - [`DashboardError::NoRuntime`] outside a tokio runtime
    pub fn start_refresh(&mut self) -> Result<RefreshOutcome, DashboardError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| DashboardError::NoRuntime)?;

        let mut state = self.shared.lock();
        if state.disposed {
            return Err(DashboardError::Disposed);
        }

        let now = self.shared.clock.now();
        let generation = state.generation;
        if state.phase == RefreshState::Refreshing {
            state.events.log(DashboardEvent::RefreshRejected { at: now, generation });
            warn!(generation, "refresh already in progress; request ignored");
            return Ok(RefreshOutcome::AlreadyRefreshing);
        }

        // No state change until the delay exists.
        let delay = self.scheduler.delay(self.config.refresh_delay());
        state.phase = RefreshState::Refreshing;
        state.events.log(DashboardEvent::RefreshStarted { at: now, generation });
        drop(state);

        // Created before spawning so an unpolled task still resets the phase.
        let guard = RefreshGuard::new(Arc::clone(&self.shared));
        self.pending = Some(runtime.spawn(async move {
            delay.await;
            guard.complete();
        }));

        info!(
            generation,
            delay_ms = self.config.refresh_delay_ms,
            "refresh started"
        );
        Ok(RefreshOutcome::Started)
    }

    /// Wait for the pending refresh, if any, to finish.
    ///
    /// # Errors
    ///
    /// [`DashboardError::RefreshTask`] when the task panicked or its runtime
    /// shut down before the delay elapsed. The orchestrator is back to Idle
    /// with the previous snapshot in both cases.
    pub async fn wait_for_refresh(&mut self) -> Result<(), DashboardError> {
        let Some(handle) = self.pending.take() else {
            return Ok(());
        };
        match handle.await {
            Ok(()) => Ok(()),
            Err(e) if e.is_cancelled() && self.is_disposed() => Ok(()),
            Err(e) => Err(DashboardError::RefreshTask(e.to_string())),
        }
    }

    /// Change the day-count selector and regenerate the sales series.
    ///
    /// Categories and orders are carried over. Selecting the current
    /// timeframe changes nothing. A pending refresh will use the new value.
    pub fn select_timeframe(
        &mut self,
        timeframe: Timeframe,
    ) -> Result<Arc<DashboardSnapshot>, DashboardError> {
        let mut state = self.shared.lock();
        if state.disposed {
            return Err(DashboardError::Disposed);
        }
        if state.timeframe == timeframe {
            return Ok(self.shared.current());
        }

        let clock = self.shared.clock.as_ref();
        let series = generate_sales_series(timeframe.days() as usize, clock, &mut state.rng)?;
        let next = state.generation + 1;
        let now = clock.now();
        let snapshot = Arc::new(self.shared.current().with_series(next, now, timeframe, series));

        state.timeframe = timeframe;
        state.generation = next;
        state.events.log(DashboardEvent::TimeframeSelected {
            at: now,
            generation: next,
            timeframe,
        });
        self.shared.snapshot_tx.send_replace(Arc::clone(&snapshot));
        info!(generation = next, %timeframe, "timeframe selected");
        Ok(snapshot)
    }

    /// Regenerate the order list outside the refresh cycle ("Load More Orders").
    pub fn reload_orders(&mut self) -> Result<Arc<DashboardSnapshot>, DashboardError> {
        let mut state = self.shared.lock();
        if state.disposed {
            return Err(DashboardError::Disposed);
        }

        let clock = self.shared.clock.as_ref();
        let orders = generate_orders(self.shared.order_count, clock, &mut state.rng)?;
        let order_count = orders.len();
        let next = state.generation + 1;
        let now = clock.now();
        let snapshot = Arc::new(self.shared.current().with_orders(next, now, orders));

        state.generation = next;
        state.events.log(DashboardEvent::OrdersReloaded {
            at: now,
            generation: next,
            order_count,
        });
        self.shared.snapshot_tx.send_replace(Arc::clone(&snapshot));
        info!(generation = next, order_count, "orders reloaded");
        Ok(snapshot)
    }

    /// Abandon any pending refresh and refuse further operations.
    ///
    /// The published snapshot is never replaced after this returns.
    pub fn dispose(&mut self) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        state.disposed = true;

        if state.phase == RefreshState::Refreshing {
            state.phase = RefreshState::Idle;
            let generation = state.generation;
            state.events.log(DashboardEvent::RefreshCancelled {
                at: self.shared.clock.now(),
                generation,
            });
            info!(generation, "pending refresh cancelled");
        }
        drop(state);

        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        debug!("dashboard disposed");
    }
}

impl Drop for RefreshOrchestrator {
    fn drop(&mut self) {
        self.dispose();
    }
}
