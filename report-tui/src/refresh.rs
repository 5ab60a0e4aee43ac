/// Refresh loop plumbing
///
/// One fetch task runs at a time. Triggering a new cycle aborts the previous
/// task, and results tagged with an older generation are dropped, so a slow
/// response can never overwrite a newer one.
use std::sync::Arc;

use async_trait::async_trait;
use report_data::{FeedClient, FeedSnapshot, error::FeedError};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info, warn};

/// Source of feed snapshots
#[async_trait]
pub trait SnapshotSource: Send + Sync + 'static {
    async fn fetch_snapshot(&self) -> Result<FeedSnapshot, FeedError>;
}

#[async_trait]
impl SnapshotSource for FeedClient {
    async fn fetch_snapshot(&self) -> Result<FeedSnapshot, FeedError> {
        FeedClient::fetch_snapshot(self).await
    }
}

/// Refresh loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Refreshing,
}

/// Result of one refresh cycle
#[derive(Debug)]
pub struct RefreshOutcome {
    pub generation: u64,
    pub result: Result<FeedSnapshot, FeedError>,
}

/// Spawns refresh cycles and collects their outcomes
pub struct Refresher<Source> {
    source: Arc<Source>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    outcome_tx: mpsc::Sender<RefreshOutcome>,
    outcome_rx: mpsc::Receiver<RefreshOutcome>,
}

impl<Source> Refresher<Source>
where
    Source: SnapshotSource,
{
    pub fn new(source: Source) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(8);
        Self {
            source: Arc::new(source),
            generation: 0,
            in_flight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> RefreshState {
        match &self.in_flight {
            Some(handle) if !handle.is_finished() => RefreshState::Refreshing,
            _ => RefreshState::Idle,
        }
    }

    /// Start a new cycle, superseding any cycle still in flight.
    pub fn trigger(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                debug!(generation = self.generation, "superseding in-flight refresh");
            }
            previous.abort();
        }

        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let outcome_tx = self.outcome_tx.clone();

        info!(generation, "refresh cycle started");
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch_snapshot().await;
            let _ = outcome_tx.send(RefreshOutcome { generation, result }).await;
        }));
    }

    /// Take the outcome of the current cycle if it has settled, discarding
    /// anything left over from superseded cycles.
    pub fn try_recv(&mut self) -> Option<RefreshOutcome> {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if outcome.generation == self.generation {
                return Some(outcome);
            }
            debug!(
                stale = outcome.generation,
                current = self.generation,
                "dropping stale refresh outcome"
            );
        }
        None
    }

    /// Wait for the current cycle to settle and take its outcome.
    ///
    /// Returns `None` when there is no cycle in flight or the task ended
    /// without reporting, e.g. after a panic.
    pub async fn recv(&mut self) -> Option<RefreshOutcome> {
        let handle = self.in_flight.take()?;
        if let Err(error) = handle.await {
            warn!(generation = self.generation, %error, "refresh task ended without an outcome");
        }
        self.try_recv()
    }
}

impl<Source> Drop for Refresher<Source> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
