//! # BASILISK Core Engine
//!
//! The queue that *is* the game state, and the lock protocol that
//! lets two threads share it:
//!
//! - [`ElasticQueue`] - array-backed FIFO with a sliding live window,
//!   growth under sustained insertion, compaction under sustained
//!   removal, and O(1) indexed reads
//! - [`Guarded`] - scoped exclusive-lock accessor; the only path to a
//!   mutable reference is the guard
//! - [`StatusFlag`] - publish/poll scalar for cooperative termination
//!
//! ## Architecture Rules
//!
//! 1. **The queue has no internal locking** - one `Guarded` serializes
//!    every compound mutation from both actors
//! 2. **Resizes never lose data** - every live record is copied into
//!    the replacement buffer before the old one is released
//! 3. **Absence is a value, not a fault** - empty and out-of-range
//!    lookups return `None`

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod queue;
pub mod sync;

pub use queue::{ElasticQueue, QueueStats, Slot};
pub use sync::{Guarded, GuardedRef, StatusFlag};
