#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Recipe
//!
//! > **Classic object-oriented design patterns, rewritten the way Rust wants them.**
//!
//! Each module is a small, self-contained sketch of one pattern. None of them depend
//! on each other; read them in any order.
//!
//! ## 🏗️ Design Philosophy
//!
//! The textbook versions of these patterns lean on inheritance, nullable globals and
//! runtime reflection. Rust has none of those, and the replacements are usually
//! simpler:
//!
//! - **Abstract base classes** become enums (closed sets) or small capability traits.
//! - **Global singletons** become values owned by a composition root.
//! - **Reflection proxies** become explicit decorators.
//! - **Exceptions** become `Result`s with one `thiserror` enum per module.
//!
//! ## 🗺️ Module Tour
//!
//! ### Creational
//! - [`singleton`]: double-checked locking ([`DoubleChecked`](singleton::DoubleChecked)),
//!   holder and static variants.
//! - [`builder`]: [`ResourcePoolConfig`](builder::ResourcePoolConfig), validated once
//!   at build time and immutable afterwards.
//! - [`factory`]: simple factory, cached simple factory, factory method registry and
//!   abstract factory.
//!
//! ### Structural
//! - [`bridge`]: [`Notification`](bridge::Notification) levels composed with
//!   [`MsgSender`](bridge::MsgSender) channels.
//! - [`proxy`]: [`MetricsProxy`](proxy::MetricsProxy) timing decorator reporting to a
//!   [`MetricsCollector`](proxy::MetricsCollector) actor.
//!
//! ### Wiring
//! - [`lifecycle`]: [`PatternSystem`](lifecycle::PatternSystem), the composition root
//!   that replaces global state, plus tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Walk through every pattern with info logs
//! RUST_LOG=info cargo run
//!
//! # Include every lookup and timed call
//! RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod bridge;
pub mod builder;
pub mod factory;
pub mod lifecycle;
pub mod proxy;
pub mod singleton;
