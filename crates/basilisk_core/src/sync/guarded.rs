//! # Guarded State
//!
//! One exclusive lock wrapping one piece of shared mutable state.
//!
//! Two concurrent actors (a periodic one and an event-driven one)
//! mutate the same queue. Every compound sequence - inspect the back
//! record, derive a new one, conditionally append or remove - must run
//! without interleaving. `Guarded` makes that structural: the only
//! path to `&mut S` is through the guard, and the guard releases the
//! lock on every exit path, early returns included.
//!
//! ## Rules
//!
//! - Never hold the guard across a blocking wait for external input
//! - Side effects tied to a mutation happen while the guard is held,
//!   so presentation can never observe a half-applied step

use parking_lot::{Mutex, MutexGuard};

/// Exclusive-lock cell for state shared between two actors.
///
/// A thin wrapper over [`parking_lot::Mutex`]: no poisoning, so a
/// panicking actor cannot wedge the other one behind a poisoned lock.
///
/// # Example
///
/// ```rust,ignore
/// let shared = Arc::new(Guarded::new(queue));
/// let net = shared.with(|q| {
///     q.push_back(record);
///     q.len()
/// });
/// ```
pub struct Guarded<S> {
    inner: Mutex<S>,
}

/// Guard giving exclusive access to the state until dropped.
pub type GuardedRef<'a, S> = MutexGuard<'a, S>;

impl<S> Guarded<S> {
    /// Wraps `state` behind a fresh exclusive lock.
    #[must_use]
    pub fn new(state: S) -> Self {
        Self {
            inner: Mutex::new(state),
        }
    }

    /// Acquires the lock, blocking until it is available.
    ///
    /// The returned guard is the critical section: it must span the
    /// whole compound operation and must not be held across a
    /// blocking wait.
    #[must_use]
    pub fn lock(&self) -> GuardedRef<'_, S> {
        self.inner.lock()
    }

    /// Runs `f` inside the critical section and returns its result.
    ///
    /// The lock is released when `f` returns or panics.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Consumes the cell and returns the state.
    ///
    /// Only callable once every other reference is gone, which is how
    /// a session reclaims its state after joining both actors.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}
