//! Utility functions module
//!
//! This module contains time math, clock sources and signal handling.

pub mod clock;
pub mod signals;
pub mod time;

// Re-export main items
pub use clock::{Clock, ManualClock, SystemClock};
pub use signals::shutdown_signal;
