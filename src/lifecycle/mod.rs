//! # System Lifecycle
//!
//! The composition root and the observability setup.
//!
//! ## Replacing Singletons
//!
//! The [`singleton`](crate::singleton) module shows how to make a globally unique
//! instance. Most of the time you do not need one: build the instance once in
//! [`PatternSystem::start`] and hand it to the code that depends on it. The
//! dependency shows up in signatures, tests can build their own instance, and the
//! constructor can take arguments.
//!
//! ```rust,ignore
//! let system = PatternSystem::start(SystemConfig::default())?;
//!
//! // Shared, explicitly owned instances
//! let dog = system.animals.get("dog")?;
//! let cat = system.factories.create("cat")?;
//!
//! // Long-lived task owned by the system
//! let snapshot = system.metrics.snapshot().await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the collector's queue
//! 2. **Collector drains** - `receiver.recv()` returns `None` after the last request
//! 3. **Await completion** - the system waits for the task to finish
//!
//! Proxies hold their own client clones, so drop them before calling
//! [`PatternSystem::shutdown`] or it will wait for them.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`](self::tracing) module for what
//! each pattern logs.

pub mod pattern_system;
pub mod tracing;

pub use pattern_system::*;
pub use self::tracing::*;
