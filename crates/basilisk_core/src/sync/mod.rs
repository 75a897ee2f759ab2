//! # Synchronization Primitives
//!
//! The lock protocol shared by the two game actors.

pub mod flag;
pub mod guarded;

pub use flag::StatusFlag;
pub use guarded::{Guarded, GuardedRef};
