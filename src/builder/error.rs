//! Error types for the pool configuration builder.

use thiserror::Error;

/// Errors raised when a [`ResourcePoolConfig`](super::ResourcePoolConfig) fails validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// `max_total` was set below zero.
    #[error("max_total must not be negative, got {0}")]
    NegativeMaxTotal(i32),

    /// `min_total` is larger than `max_total`.
    #[error("min_total ({min_total}) exceeds max_total ({max_total})")]
    MinExceedsMax { min_total: i32, max_total: i32 },
}
