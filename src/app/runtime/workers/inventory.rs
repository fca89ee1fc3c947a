use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::select;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};

use crate::sources::{InventoryFeed, ProductBaseline, records_to_products};
use crate::state::RefreshOutcome;

/// What: Perform one refresh attempt.
///
/// Inputs:
/// - `feed`: Source to fetch from
/// - `baseline`: Values for fields the feed omits
/// - `seq`: Sequence number to stamp on the outcome
///
/// Output:
/// - `RefreshOutcome` carrying the new collection or the failure reason
///
/// Details:
/// - Transport, decode and validation failures all end up as `Err(String)`
pub async fn refresh_once(
    feed: &dyn InventoryFeed,
    baseline: &ProductBaseline,
    seq: u64,
) -> RefreshOutcome {
    let started = Instant::now();
    let result = match feed.fetch().await {
        Ok(records) => records_to_products(&records, baseline),
        Err(e) => Err(e.to_string()),
    };
    let elapsed_ms = started.elapsed().as_millis();
    match &result {
        Ok(products) => tracing::debug!(
            seq,
            source = %feed.describe(),
            products = products.len(),
            elapsed_ms,
            "inventory refresh succeeded"
        ),
        Err(e) => tracing::debug!(
            seq,
            source = %feed.describe(),
            error = %e,
            elapsed_ms,
            "inventory refresh failed"
        ),
    }
    RefreshOutcome {
        seq,
        finished_at: Utc::now(),
        result,
    }
}

/// Handle to a running inventory poller.
///
/// Dropping the handle aborts the worker; [`PollerHandle::stop`] shuts it down
/// and waits for it.
pub struct PollerHandle {
    /// Signals the worker to finish.
    shutdown: Option<oneshot::Sender<()>>,
    /// Requests an immediate refresh.
    refresh_tx: mpsc::UnboundedSender<()>,
    /// Worker task.
    join: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// What: Ask for a refresh now instead of at the next tick.
    ///
    /// Details:
    /// - The interval restarts after the manual refresh
    /// - Requests arriving while a fetch runs collapse into one follow-up refresh
    pub fn refresh_now(&self) {
        if self.refresh_tx.send(()).is_err() {
            tracing::debug!("refresh requested after inventory worker exited");
        }
    }

    /// What: Stop polling and wait for the worker to exit.
    ///
    /// Details:
    /// - A fetch in flight is abandoned; no outcome is sent after this returns
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take()
            && let Err(e) = join.await
        {
            tracing::warn!(error = %e, "inventory worker ended abnormally");
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}

/// What: Spawn the inventory poll worker.
///
/// Inputs:
/// - `feed`: Source of inventory records
/// - `baseline`: Values for fields the feed omits
/// - `period`: Time between refreshes
/// - `outcome_tx`: Channel receiving every refresh outcome
///
/// Output:
/// - `PollerHandle` controlling the worker
///
/// Details:
/// - First refresh starts immediately
/// - Refreshes never overlap; ticks missed during a slow fetch are skipped
/// - Outcomes carry increasing sequence numbers starting at 1
/// - The worker exits when stopped or when `outcome_tx` has no receiver
pub fn spawn_inventory_worker(
    feed: Arc<dyn InventoryFeed>,
    baseline: ProductBaseline,
    period: Duration,
    outcome_tx: mpsc::UnboundedSender<RefreshOutcome>,
) -> PollerHandle {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
    let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel::<()>();

    let join = tokio::spawn(async move {
        tracing::info!(
            source = %feed.describe(),
            period_ms = period.as_millis(),
            "inventory worker started"
        );
        // `interval` panics on a zero period
        let mut ticker = interval(period.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut seq: u64 = 0;
        loop {
            select! {
                biased;
                _ = &mut shutdown_rx => break,
                Some(()) = refresh_rx.recv() => {
                    while refresh_rx.try_recv().is_ok() {}
                    ticker.reset();
                }
                _ = ticker.tick() => {}
            }
            seq += 1;
            let outcome = select! {
                biased;
                _ = &mut shutdown_rx => break,
                outcome = refresh_once(feed.as_ref(), &baseline, seq) => outcome,
            };
            if outcome_tx.send(outcome).is_err() {
                tracing::debug!("outcome receiver dropped; inventory worker exiting");
                break;
            }
        }
        tracing::info!(refreshes = seq, "inventory worker stopped");
    });

    PollerHandle {
        shutdown: Some(shutdown_tx),
        refresh_tx,
        join: Some(join),
    }
}
