//! # Metrics Collector
//!
//! The collector is a small actor: it owns the per-API statistics and processes
//! requests one at a time in its own Tokio task, so the statistics need no lock.
//! Everything else talks to it through a cloneable [`MetricsClient`].

use super::error::MetricsError;
use super::message::{CallRecord, MetricsRequest, MetricsSnapshot};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Server half of the metrics actor.
///
/// # Usage Pattern
///
/// 1. **Create**: `MetricsCollector::new(capacity)` returns the collector and its client.
/// 2. **Run**: spawn `collector.run()` on the runtime.
/// 3. **Use**: hand clones of the client to every [`MetricsProxy`](super::MetricsProxy).
///
/// The loop ends once every client has been dropped.
pub struct MetricsCollector {
    receiver: mpsc::Receiver<MetricsRequest>,
    snapshot: MetricsSnapshot,
}

impl MetricsCollector {
    /// Creates the collector and the client that feeds it.
    ///
    /// `capacity` bounds the number of queued requests. Records that arrive while
    /// the queue is full are discarded rather than blocking the timed call.
    pub fn new(capacity: usize) -> (Self, MetricsClient) {
        let (sender, receiver) = mpsc::channel(capacity);
        let collector = Self {
            receiver,
            snapshot: MetricsSnapshot::default(),
        };
        (collector, MetricsClient::new(sender))
    }

    pub async fn run(mut self) {
        info!("Metrics collector started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                MetricsRequest::Record(record) => {
                    debug!(api = %record.api_name, elapsed = ?record.elapsed, "Record");
                    self.snapshot
                        .apis
                        .entry(record.api_name)
                        .or_default()
                        .observe(record.elapsed);
                }
                MetricsRequest::Snapshot { respond_to } => {
                    debug!(apis = self.snapshot.apis.len(), "Snapshot");
                    let _ = respond_to.send(Ok(self.snapshot.clone()));
                }
                MetricsRequest::Reset { respond_to } => {
                    info!(apis = self.snapshot.apis.len(), "Reset");
                    self.snapshot = MetricsSnapshot::default();
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(
            apis = self.snapshot.apis.len(),
            calls = self.snapshot.total_calls(),
            "Metrics collector shutdown"
        );
    }
}

/// Cheap-to-clone handle for a running [`MetricsCollector`].
#[derive(Debug, Clone)]
pub struct MetricsClient {
    sender: mpsc::Sender<MetricsRequest>,
}

impl MetricsClient {
    pub fn new(sender: mpsc::Sender<MetricsRequest>) -> Self {
        Self { sender }
    }

    /// Queues a record without waiting, so it can be called from sync code.
    pub fn record(&self, record: CallRecord) -> Result<(), MetricsError> {
        let api_name = record.api_name.clone();
        self.sender
            .try_send(MetricsRequest::Record(record))
            .map_err(|e| match e {
                TrySendError::Full(_) => {
                    warn!(api = %api_name, "Metrics queue full");
                    MetricsError::Backpressure(api_name)
                }
                TrySendError::Closed(_) => MetricsError::CollectorClosed,
            })
    }

    pub async fn snapshot(&self) -> Result<MetricsSnapshot, MetricsError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MetricsRequest::Snapshot { respond_to })
            .await
            .map_err(|_| MetricsError::CollectorClosed)?;
        response.await.map_err(|_| MetricsError::CollectorDropped)?
    }

    pub async fn reset(&self) -> Result<(), MetricsError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MetricsRequest::Reset { respond_to })
            .await
            .map_err(|_| MetricsError::CollectorClosed)?;
        response.await.map_err(|_| MetricsError::CollectorDropped)?
    }
}
