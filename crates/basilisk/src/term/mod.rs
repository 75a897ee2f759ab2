//! # Terminal Layer
//!
//! Raw-mode control, ANSI drawing, and signal handling. Everything
//! that touches the console lives here; the queue core never does.

pub mod raw;
pub mod screen;

pub use raw::RawMode;
pub use screen::{Screen, ScreenMode};
