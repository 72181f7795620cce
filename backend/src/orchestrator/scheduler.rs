//! Simulated-latency scheduling
//!
//! The refresh cycle waits a fixed delay before regenerating datasets. The
//! wait goes through [`Scheduler`] so production code sleeps on the tokio timer
//! while tests release the delay by hand.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;

/// Boxed future returned by [`Scheduler::delay`].
pub type DelayFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Produces the suspension point of a refresh.
pub trait Scheduler: Send + Sync {
    /// A future that resolves once `duration` has elapsed.
    ///
    /// Called synchronously from `start_refresh`; must not panic. Timer
    /// registration belongs inside the returned future.
    fn delay(&self, duration: Duration) -> DelayFuture;
}

/// Sleeps on the tokio timer.
///
/// The sleep is created on first poll, so a runtime without the time driver
/// fails inside the refresh task rather than in the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn delay(&self, duration: Duration) -> DelayFuture {
        Box::pin(async move { tokio::time::sleep(duration).await })
    }
}

/// A scheduler whose delays only elapse when [`ManualScheduler::fire`] is called.
///
/// Cloning shares the underlying trigger, so a test keeps one clone and hands
/// the other to the orchestrator. `fire` only releases delays that already
/// exist; it never stores a wakeup for a later one.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use sales_dashboard_core_rs::orchestrator::{ManualScheduler, Scheduler};
///
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// rt.block_on(async {
///     let scheduler = ManualScheduler::new();
///     let delay = scheduler.delay(Duration::from_secs(6));
///     assert!(scheduler.fire());
///     delay.await;
///     assert_eq!(scheduler.requested(), vec![Duration::from_secs(6)]);
/// });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    waiting: Arc<Mutex<VecDeque<oneshot::Sender<()>>>>,
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let the oldest live delay elapse.
    ///
    /// Delays whose future was dropped (aborted refresh, shut-down runtime)
    /// are skipped. Returns `false` when no live delay was waiting.
    pub fn fire(&self) -> bool {
        let mut waiting = self.waiting.lock().unwrap_or_else(PoisonError::into_inner);
        while let Some(tx) = waiting.pop_front() {
            if tx.send(()).is_ok() {
                return true;
            }
        }
        false
    }

    /// Every duration requested so far, in order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Scheduler for ManualScheduler {
    fn delay(&self, duration: Duration) -> DelayFuture {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
        let (tx, rx) = oneshot::channel();
        self.waiting
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(tx);
        Box::pin(async move {
            // Sender gone means the scheduler was dropped; never elapse.
            if rx.await.is_err() {
                std::future::pending::<()>().await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_waits_full_duration() {
        let start = tokio::time::Instant::now();
        TokioScheduler.delay(Duration::from_millis(6000)).await;
        assert!(start.elapsed() >= Duration::from_millis(6000));
    }

    #[tokio::test]
    async fn test_manual_delay_pending_until_fired() {
        let scheduler = ManualScheduler::new();
        let mut delay = scheduler.delay(Duration::from_secs(1));

        let not_ready = tokio::time::timeout(Duration::from_millis(20), &mut delay).await;
        assert!(not_ready.is_err(), "delay elapsed without fire()");

        scheduler.fire();
        delay.await;
    }

    #[tokio::test]
    async fn test_fire_without_waiting_delay_is_not_stored() {
        let scheduler = ManualScheduler::new();
        assert!(!scheduler.fire());

        let mut delay = scheduler.delay(Duration::from_secs(1));
        let not_ready = tokio::time::timeout(Duration::from_millis(20), &mut delay).await;
        assert!(not_ready.is_err(), "earlier fire() released a later delay");

        assert!(scheduler.fire());
        delay.await;
    }

    #[tokio::test]
    async fn test_fire_skips_dropped_delays() {
        let scheduler = ManualScheduler::new();
        drop(scheduler.delay(Duration::from_secs(1)));
        let live = scheduler.delay(Duration::from_secs(2));

        assert!(scheduler.fire());
        live.await;
        assert!(!scheduler.fire());
    }

    #[test]
    fn test_tokio_delay_creation_needs_no_timer() {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            // Building the future must not touch the time driver.
            let _delay = TokioScheduler.delay(Duration::from_millis(10));
        });
    }
}
