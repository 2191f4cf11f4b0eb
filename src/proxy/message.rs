//! # Collector Messages
//!
//! The values exchanged between [`MetricsClient`](super::MetricsClient) and
//! [`MetricsCollector`](super::MetricsCollector).

use super::error::MetricsError;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the collector.
pub type Response<T> = oneshot::Sender<Result<T, MetricsError>>;

/// One timed call observed by a [`MetricsProxy`](super::MetricsProxy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// `"<TypeName>:<method>"`
    pub api_name: String,
    pub elapsed: Duration,
}

/// Aggregated timings for a single API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiStats {
    pub calls: u64,
    pub total: Duration,
    pub max: Duration,
}

impl ApiStats {
    pub(crate) fn observe(&mut self, elapsed: Duration) {
        self.calls += 1;
        self.total += elapsed;
        self.max = self.max.max(elapsed);
    }
}

/// Point-in-time copy of everything the collector has seen, keyed by API name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub apis: BTreeMap<String, ApiStats>,
}

impl MetricsSnapshot {
    pub fn get(&self, api_name: &str) -> Option<&ApiStats> {
        self.apis.get(api_name)
    }

    pub fn total_calls(&self) -> u64 {
        self.apis.values().map(|stats| stats.calls).sum()
    }
}

/// Requests handled by the collector's message loop.
#[derive(Debug)]
pub enum MetricsRequest {
    Record(CallRecord),
    Snapshot {
        respond_to: Response<MetricsSnapshot>,
    },
    Reset {
        respond_to: Response<()>,
    },
}
