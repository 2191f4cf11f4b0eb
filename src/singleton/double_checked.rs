//! A lazily initialised slot guarded by double-checked locking.

use std::sync::{Mutex, OnceLock, PoisonError};

/// Lazy cell that only takes its lock while the value is still missing.
///
/// Reads go straight to the slot. If it is empty, the caller enters the mutex and
/// looks again before constructing, so racing first callers build the value once and
/// every later access skips the lock entirely.
///
/// `OnceLock::get_or_init` already serialises racing initialisers on its own; the
/// explicit mutex is here to spell out the textbook protocol. Outside a teaching
/// context, a bare `OnceLock` is enough.
pub struct DoubleChecked<T> {
    slot: OnceLock<T>,
    init_lock: Mutex<()>,
}

impl<T> DoubleChecked<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Returns the value if it has already been constructed.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        // First check: no lock.
        if let Some(value) = self.slot.get() {
            return value;
        }

        // A panic in another initialiser leaves the slot empty, so the guard is still usable.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Second check: someone may have won the race while we waited.
        self.slot.get_or_init(init)
    }
}

impl<T> Default for DoubleChecked<T> {
    fn default() -> Self {
        Self::new()
    }
}
