//! # Observability & Tracing
//!
//! Structured logging for every pattern module, built on the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Builder**: rejected configs (`warn`) and built configs (`debug`)
//! - **Factories**: lookups, creations and unknown keys
//! - **Bridge**: each notification (`info`) and each per-recipient send (`debug`)
//! - **Proxy**: every timed call (`debug`), collector start, reset and shutdown (`info`)
//! - **Singletons**: the one construction of [`Singleton`](crate::singleton::Singleton)
//!
//! ## Usage
//!
//! ```bash
//! # Lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every lookup, send and timed call
//! RUST_LOG=debug cargo run
//!
//! # Just the proxy
//! RUST_LOG=pattern_recipe::proxy=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the demo prints lines such as:
//!
//! ```text
//! DEBUG Created kind="dog" animal=dog
//! DEBUG Timed call api="FactoryMethod:create" elapsed=1.2µs
//! INFO Server notification msg="pool config loaded"
//! DEBUG Send telephone="555-0100" message="pool config loaded"
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Calling it more than once is harmless; only the first call installs anything.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // module paths add noise; fields carry the context
        .compact()
        .try_init();
}
