//! # Timing Proxy
//!
//! [`MetricsProxy`] wraps a value and measures every call routed through it, without
//! the wrapped type knowing. Each measurement is reported to the metrics collector
//! under `"<TypeName>:<method>"`.
//!
//! There is no runtime reflection to intercept arbitrary methods, so calls go through
//! [`call`](MetricsProxy::call) / [`call_async`](MetricsProxy::call_async) explicitly.
//! For a capability trait the proxy can implement the trait itself and forward each
//! method, which is what it does for [`MsgSender`]: a proxied sender drops into a
//! [`ServerNotification`](crate::bridge::ServerNotification) unchanged.

use super::collector::MetricsClient;
use super::message::CallRecord;
use crate::bridge::MsgSender;
use async_trait::async_trait;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Pointer types that only hold the value being proxied.
const TRANSPARENT_WRAPPERS: [&str; 3] = [
    "alloc::sync::Arc<",
    "alloc::rc::Rc<",
    "alloc::boxed::Box<",
];

/// First generic argument of a name that has had its `Wrapper<` prefix removed.
fn first_argument(rest: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match c {
            '<' => depth += 1,
            '>' | ',' if depth == 0 => return &rest[..i],
            '>' => depth -= 1,
            _ => {}
        }
    }
    rest
}

/// Last path segment of `T`'s name, without generic arguments.
///
/// References and smart pointers are looked through, so `Arc<SimpleFactory>` and
/// `&SimpleFactory` both report as `SimpleFactory`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let mut name = std::any::type_name::<T>();
    loop {
        name = name.trim_start_matches('&').trim_start_matches("mut ");
        name = name.strip_prefix("dyn ").unwrap_or(name);
        match TRANSPARENT_WRAPPERS
            .iter()
            .find_map(|wrapper| name.strip_prefix(wrapper))
        {
            Some(rest) => name = first_argument(rest).trim(),
            None => break,
        }
    }
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}

/// Decorator that times calls into `T`.
#[derive(Debug, Clone)]
pub struct MetricsProxy<T> {
    inner: T,
    metrics: MetricsClient,
    type_name: &'static str,
}

impl<T> MetricsProxy<T> {
    pub fn new(inner: T, metrics: MetricsClient) -> Self {
        Self {
            inner,
            metrics,
            type_name: short_type_name::<T>(),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Runs `f` against the wrapped value and records how long it took.
    pub fn call<R>(&self, method: &str, f: impl FnOnce(&T) -> R) -> R {
        let start = Instant::now();
        let result = f(&self.inner);
        self.report(method, start.elapsed());
        result
    }

    /// Async counterpart of [`call`](Self::call); the timer covers the whole future.
    pub async fn call_async<'a, R, F, Fut>(&'a self, method: &str, f: F) -> R
    where
        F: FnOnce(&'a T) -> Fut,
        Fut: Future<Output = R>,
    {
        let start = Instant::now();
        let result = f(&self.inner).await;
        self.report(method, start.elapsed());
        result
    }

    fn report(&self, method: &str, elapsed: Duration) {
        let api_name = format!("{}:{}", self.type_name, method);
        debug!(api = %api_name, ?elapsed, "Timed call");

        // Metrics are best effort; the caller still gets its result.
        if let Err(e) = self.metrics.record(CallRecord { api_name, elapsed }) {
            warn!(error = %e, "Dropped call record");
        }
    }
}

#[async_trait]
impl<S: MsgSender> MsgSender for MetricsProxy<S> {
    async fn send(&self, message: &str) {
        self.call_async("send", |sender| sender.send(message)).await
    }
}
