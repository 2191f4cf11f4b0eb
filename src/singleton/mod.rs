//! # Singleton Pattern
//!
//! Globally unique instances, constructed lazily on first access.
//!
//! Three flavours are shown side by side:
//!
//! - [`Singleton`]: explicit double-checked locking through [`DoubleChecked`].
//! - [`HolderSingleton`]: a function-local `static` cell, the runtime guarantees a
//!   single initialisation.
//! - [`EagerSingleton`]: a `LazyLock` static, no user-visible locking at all.
//!
//! ## Drawbacks
//!
//! Global accessors hide dependencies (any line of code may call `instance()`),
//! are hard to substitute in tests, and cannot take constructor arguments. Prefer
//! building the instance once in a composition root and passing it down; see
//! [`PatternSystem`](crate::lifecycle::PatternSystem).

pub mod double_checked;

pub use double_checked::DoubleChecked;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, OnceLock};
use tracing::info;

static SINGLETON: DoubleChecked<Singleton> = DoubleChecked::new();
static SINGLETON_BUILDS: AtomicUsize = AtomicUsize::new(0);

/// Lazily constructed global guarded by double-checked locking.
#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    fn new() -> Self {
        let builds = SINGLETON_BUILDS.fetch_add(1, Ordering::SeqCst) + 1;
        info!(builds, "Singleton constructed");
        Self { _private: () }
    }

    pub fn instance() -> &'static Singleton {
        SINGLETON.get_or_init(Singleton::new)
    }

    /// Number of times the constructor has run in this process.
    pub fn construction_count() -> usize {
        SINGLETON_BUILDS.load(Ordering::SeqCst)
    }
}

static HOLDER_BUILDS: AtomicUsize = AtomicUsize::new(0);

/// Lazy global held in a function-local static.
#[derive(Debug)]
pub struct HolderSingleton {
    _private: (),
}

impl HolderSingleton {
    pub fn instance() -> &'static HolderSingleton {
        static HOLDER: OnceLock<HolderSingleton> = OnceLock::new();
        HOLDER.get_or_init(|| {
            HOLDER_BUILDS.fetch_add(1, Ordering::SeqCst);
            HolderSingleton { _private: () }
        })
    }

    pub fn construction_count() -> usize {
        HOLDER_BUILDS.load(Ordering::SeqCst)
    }
}

static EAGER_BUILDS: AtomicUsize = AtomicUsize::new(0);

static EAGER: LazyLock<EagerSingleton> = LazyLock::new(|| {
    EAGER_BUILDS.fetch_add(1, Ordering::SeqCst);
    EagerSingleton { _private: () }
});

/// Global declared directly as a `static`; the closest analogue of an enum singleton.
#[derive(Debug)]
pub struct EagerSingleton {
    _private: (),
}

impl EagerSingleton {
    pub fn instance() -> &'static EagerSingleton {
        &EAGER
    }

    pub fn construction_count() -> usize {
        EAGER_BUILDS.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn addresses_from_threads<T: Sync + 'static>(accessor: fn() -> &'static T) -> Vec<usize> {
        let handles: Vec<_> = (0..12)
            .map(|_| thread::spawn(move || accessor() as *const T as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    }

    #[test]
    fn test_singleton_same_instance_across_threads() {
        let addresses = addresses_from_threads(Singleton::instance);
        let expected = Singleton::instance() as *const Singleton as usize;
        assert!(addresses.iter().all(|&a| a == expected));
        assert_eq!(Singleton::construction_count(), 1);
    }

    #[test]
    fn test_holder_same_instance_across_threads() {
        let addresses = addresses_from_threads(HolderSingleton::instance);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert!(std::ptr::eq(HolderSingleton::instance(), HolderSingleton::instance()));
        assert_eq!(HolderSingleton::construction_count(), 1);
    }

    #[test]
    fn test_eager_same_instance_across_threads() {
        let addresses = addresses_from_threads(EagerSingleton::instance);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(EagerSingleton::construction_count(), 1);
    }
}
