//! # Metrics Errors
//!
//! Failures talking to the metrics collector task.

/// Errors that can occur when reaching the [`MetricsCollector`](super::MetricsCollector).
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum MetricsError {
    #[error("Metrics collector closed")]
    CollectorClosed,
    #[error("Metrics collector dropped response channel")]
    CollectorDropped,
    #[error("Metrics collector is backed up, record for {0} discarded")]
    Backpressure(String),
}
