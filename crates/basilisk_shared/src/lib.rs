//! # BASILISK Shared Types
//!
//! Pure data shared by the game crates: board cells, directions,
//! outcome codes, and the built-in tuning constants. No engine, no
//! terminal, no threads.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cell;
pub mod constants;
pub mod direction;
pub mod outcome;

pub use cell::Cell;
pub use direction::Direction;
pub use outcome::{Outcome, RUNNING};
