//! # Status Flag
//!
//! A small published scalar both actors poll between mutations.
//!
//! The flag is written only inside the critical section, but reading
//! it does not take the lock: it is a single-writer scalar, so the
//! worst case is one stale observation per tick, which delays an
//! actor's exit by one iteration and can never corrupt queue state.
//! The flag is polled, never awaited.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lock-free publish/poll cell for a one-byte status code.
///
/// Used as the cooperative cancellation token: the mutation that
/// detects a terminal condition publishes the outcome, and both
/// actors poll it before attempting to acquire the lock.
#[derive(Debug)]
pub struct StatusFlag {
    value: AtomicU8,
}

impl StatusFlag {
    /// Creates a flag holding `initial`.
    #[must_use]
    pub const fn new(initial: u8) -> Self {
        Self {
            value: AtomicU8::new(initial),
        }
    }

    /// Publishes a new status.
    ///
    /// Call only while holding the lock that guards the state the
    /// status describes, so the store is ordered after the mutation
    /// it announces.
    #[inline]
    pub fn publish(&self, status: u8) {
        self.value.store(status, Ordering::Release);
    }

    /// Reads the current status without taking any lock.
    #[inline]
    #[must_use]
    pub fn poll(&self) -> u8 {
        self.value.load(Ordering::Acquire)
    }
}
