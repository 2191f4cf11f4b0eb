//! # Proxy Pattern
//!
//! Attach behaviour to a type without modifying it.
//!
//! [`MetricsProxy`] is an explicit decorator: it owns the wrapped value, times each
//! call made through it and reports the measurement to a [`MetricsCollector`]
//! running in its own task.
//!
//! ```rust
//! use pattern_recipe::factory::SimpleFactory;
//! use pattern_recipe::proxy::{MetricsCollector, MetricsProxy};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (collector, metrics) = MetricsCollector::new(32);
//! tokio::spawn(collector.run());
//!
//! let factory = MetricsProxy::new(SimpleFactory, metrics.clone());
//! let dog = factory.call("create", |f| f.create("dog"));
//! assert!(dog.is_ok());
//!
//! let snapshot = metrics.snapshot().await.unwrap();
//! assert_eq!(snapshot.get("SimpleFactory:create").unwrap().calls, 1);
//! # }
//! ```

pub mod collector;
pub mod error;
pub mod message;
pub mod timing;

pub use collector::{MetricsClient, MetricsCollector};
pub use error::MetricsError;
pub use message::{ApiStats, CallRecord, MetricsRequest, MetricsSnapshot, Response};
pub use timing::MetricsProxy;
