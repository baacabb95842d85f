//! State management module
//!
//! This module contains the timer state, the state machine that drives it,
//! and the shared application state the host works through.

pub mod app_state;
pub mod machine;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, TimerSnapshot};
pub use machine::TimerMachine;
pub use timer_state::TimerState;
