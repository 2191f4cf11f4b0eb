//! # Builder Pattern
//!
//! Multi-parameter construction with joint validation.
//!
//! A [`ResourcePoolConfig`] can only be obtained through
//! [`ResourcePoolConfigBuilder::build`], which checks every field together before the
//! value exists. Once built, the config has no setters, so it can never sit in a
//! half-configured state.
//!
//! ```rust
//! use pattern_recipe::builder::ResourcePoolConfig;
//!
//! let config = ResourcePoolConfig::builder()
//!     .name("db-pool")
//!     .max_total(16)
//!     .min_total(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_total(), 16);
//! ```
//!
//! ## Loading from a file
//!
//! The builder is `Deserialize`, so a config can come from any serde format. Missing
//! fields take the same defaults as the fluent API, and the result still has to pass
//! through [`build`](ResourcePoolConfigBuilder::build).

pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default upper bound on pooled resources.
pub const DEFAULT_MAX_TOTAL: i32 = 8;

/// Default lower bound on pooled resources.
pub const DEFAULT_MIN_TOTAL: i32 = 0;

/// Immutable resource pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePoolConfig {
    name: Option<String>,
    max_total: i32,
    min_total: i32,
}

impl ResourcePoolConfig {
    /// Starts a builder with every field at its default.
    pub fn builder() -> ResourcePoolConfigBuilder {
        ResourcePoolConfigBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn max_total(&self) -> i32 {
        self.max_total
    }

    pub fn min_total(&self) -> i32 {
        self.min_total
    }
}

/// Fluent builder for [`ResourcePoolConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourcePoolConfigBuilder {
    name: Option<String>,
    max_total: i32,
    min_total: i32,
}

impl Default for ResourcePoolConfigBuilder {
    fn default() -> Self {
        Self {
            name: None,
            max_total: DEFAULT_MAX_TOTAL,
            min_total: DEFAULT_MIN_TOTAL,
        }
    }
}

impl ResourcePoolConfigBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn max_total(mut self, max_total: i32) -> Self {
        self.max_total = max_total;
        self
    }

    pub fn min_total(mut self, min_total: i32) -> Self {
        self.min_total = min_total;
        self
    }

    /// Validates the collected fields and produces the config.
    ///
    /// # Errors
    /// - [`ConfigError::NegativeMaxTotal`] when `max_total < 0`
    /// - [`ConfigError::MinExceedsMax`] when `min_total > max_total`
    pub fn build(self) -> Result<ResourcePoolConfig, ConfigError> {
        if self.max_total < 0 {
            warn!(max_total = self.max_total, "Rejected pool config");
            return Err(ConfigError::NegativeMaxTotal(self.max_total));
        }
        if self.min_total > self.max_total {
            warn!(
                min_total = self.min_total,
                max_total = self.max_total,
                "Rejected pool config"
            );
            return Err(ConfigError::MinExceedsMax {
                min_total: self.min_total,
                max_total: self.max_total,
            });
        }

        debug!(
            name = ?self.name,
            max_total = self.max_total,
            min_total = self.min_total,
            "Built pool config"
        );
        Ok(ResourcePoolConfig {
            name: self.name,
            max_total: self.max_total,
            min_total: self.min_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResourcePoolConfig::builder().build().unwrap();
        assert_eq!(config.name(), None);
        assert_eq!(config.max_total(), DEFAULT_MAX_TOTAL);
        assert_eq!(config.min_total(), DEFAULT_MIN_TOTAL);
    }

    #[test]
    fn test_custom_values() {
        let config = ResourcePoolConfig::builder()
            .name("cache")
            .max_total(20)
            .min_total(5)
            .build()
            .unwrap();

        assert_eq!(config.name(), Some("cache"));
        assert_eq!(config.max_total(), 20);
        assert_eq!(config.min_total(), 5);
    }

    #[test]
    fn test_negative_max_rejected() {
        for max_total in [-1, -8, i32::MIN] {
            let err = ResourcePoolConfig::builder()
                .min_total(max_total)
                .max_total(max_total)
                .build()
                .unwrap_err();
            assert_eq!(err, ConfigError::NegativeMaxTotal(max_total));
        }
    }

    #[test]
    fn test_min_above_max_rejected() {
        for (min_total, max_total) in [(1, 0), (9, 8), (i32::MAX, 100)] {
            let err = ResourcePoolConfig::builder()
                .max_total(max_total)
                .min_total(min_total)
                .build()
                .unwrap_err();
            assert_eq!(err, ConfigError::MinExceedsMax { min_total, max_total });
        }
    }

    #[test]
    fn test_min_above_default_max_rejected() {
        let result = ResourcePoolConfig::builder().min_total(DEFAULT_MAX_TOTAL + 1).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_range_accepted() {
        for max_total in 0..=12 {
            for min_total in 0..=max_total {
                let config = ResourcePoolConfig::builder()
                    .max_total(max_total)
                    .min_total(min_total)
                    .build()
                    .unwrap();
                assert_eq!(config.max_total(), max_total);
                assert_eq!(config.min_total(), min_total);
            }
        }
    }

    #[test]
    fn test_setter_order_does_not_matter() {
        // min above the default max is fine once max is raised later in the chain
        let config = ResourcePoolConfig::builder()
            .min_total(10)
            .max_total(12)
            .build()
            .unwrap();
        assert_eq!(config.min_total(), 10);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let builder: ResourcePoolConfigBuilder =
            serde_json::from_str(r#"{ "name": "http", "minTotal": 3 }"#).unwrap();
        let config = builder.build().unwrap();

        assert_eq!(config.name(), Some("http"));
        assert_eq!(config.max_total(), DEFAULT_MAX_TOTAL);
        assert_eq!(config.min_total(), 3);
    }

    #[test]
    fn test_deserialized_config_still_validated() {
        let builder: ResourcePoolConfigBuilder =
            serde_json::from_str(r#"{ "maxTotal": 2, "minTotal": 4 }"#).unwrap();
        assert_eq!(
            builder.build(),
            Err(ConfigError::MinExceedsMax { min_total: 4, max_total: 2 })
        );
    }

    #[test]
    fn test_serialize_config() {
        let config = ResourcePoolConfig::builder().name("jobs").build().unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["name"], "jobs");
        assert_eq!(value["maxTotal"], DEFAULT_MAX_TOTAL);
    }
}
