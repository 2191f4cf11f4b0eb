use crate::builder::{ConfigError, ResourcePoolConfig, ResourcePoolConfigBuilder};
use crate::factory::{CachedSimpleFactory, FactoryMethod};
use crate::proxy::{MetricsClient, MetricsCollector, MetricsProxy};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

/// Default capacity of the metrics request queue.
pub const DEFAULT_METRICS_CAPACITY: usize = 64;

/// Settings for [`PatternSystem::start`].
///
/// Deserializable so the whole system can be described in one file; every field
/// is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemConfig {
    pub metrics_capacity: usize,
    pub pool: ResourcePoolConfigBuilder,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            metrics_capacity: DEFAULT_METRICS_CAPACITY,
            pool: ResourcePoolConfigBuilder::default(),
        }
    }
}

/// Errors raised while starting or stopping a [`PatternSystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid pool config: {0}")]
    Config(#[from] ConfigError),

    #[error("Metrics capacity must be at least 1")]
    ZeroCapacity,

    #[error("Task failed: {0}")]
    TaskFailed(String),
}

/// Composition root for the pattern sketches.
///
/// Instead of reaching for global singletons, the application builds its shared
/// instances here, once, and passes references or clones to whoever needs them.
/// Lifetimes are explicit: everything lives exactly as long as the system.
///
/// `PatternSystem` is responsible for:
/// - **Construction**: validating the pool config and building the factories
/// - **Task management**: spawning the metrics collector
/// - **Shutdown**: closing the collector and awaiting its task
///
/// # Example
///
/// ```ignore
/// let system = PatternSystem::start(SystemConfig::default())?;
///
/// let factories = system.proxied(FactoryMethod::new());
/// let dog = factories.call("create", |f| f.create("dog"))?;
///
/// system.shutdown().await?;
/// ```
pub struct PatternSystem {
    /// Validated pool settings shared by the whole application
    pub pool_config: ResourcePoolConfig,

    /// Factory-method registry
    pub factories: FactoryMethod,

    /// Shared, pre-built animals
    pub animals: CachedSimpleFactory,

    /// Handle to the metrics collector task
    pub metrics: MetricsClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PatternSystem {
    /// Builds every shared instance and spawns the metrics collector.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: SystemConfig) -> Result<Self, SystemError> {
        if config.metrics_capacity == 0 {
            return Err(SystemError::ZeroCapacity);
        }
        let pool_config = config.pool.build()?;

        let (collector, metrics) = MetricsCollector::new(config.metrics_capacity);
        let collector_handle = tokio::spawn(collector.run());

        info!(
            pool = ?pool_config.name(),
            max_total = pool_config.max_total(),
            min_total = pool_config.min_total(),
            "Pattern system started"
        );

        Ok(Self {
            pool_config,
            factories: FactoryMethod::new(),
            animals: CachedSimpleFactory::new(),
            metrics,
            handles: vec![collector_handle],
        })
    }

    /// Wraps `inner` in a [`MetricsProxy`] reporting to this system's collector.
    pub fn proxied<T>(&self, inner: T) -> MetricsProxy<T> {
        MetricsProxy::new(inner, self.metrics.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the system's metrics client closes the collector's queue once every
    /// proxy handed out by [`proxied`](Self::proxied) is gone as well; the collector
    /// then drains what is left and its task ends.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down pattern system...");

        drop(self.metrics);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("Pattern system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DEFAULT_MAX_TOTAL;

    #[tokio::test]
    async fn test_start_with_defaults() {
        let system = PatternSystem::start(SystemConfig::default()).unwrap();
        assert_eq!(system.pool_config.max_total(), DEFAULT_MAX_TOTAL);
        assert!(system.factories.is_registered("dog"));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_pool_config_rejected() {
        let config = SystemConfig {
            pool: ResourcePoolConfig::builder().max_total(-3),
            ..SystemConfig::default()
        };
        let result = PatternSystem::start(config);
        assert!(matches!(
            result,
            Err(SystemError::Config(ConfigError::NegativeMaxTotal(-3)))
        ));
    }

    #[tokio::test]
    async fn test_zero_capacity_rejected() {
        let config = SystemConfig {
            metrics_capacity: 0,
            ..SystemConfig::default()
        };
        assert!(matches!(
            PatternSystem::start(config),
            Err(SystemError::ZeroCapacity)
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config: SystemConfig = serde_json::from_str(
            r#"{ "metricsCapacity": 8, "pool": { "name": "workers", "maxTotal": 4 } }"#,
        )
        .unwrap();
        assert_eq!(config.metrics_capacity, 8);

        let pool = config.pool.build().unwrap();
        assert_eq!(pool.name(), Some("workers"));
        assert_eq!(pool.max_total(), 4);
    }
}
