//! Pomodoro Tray - a headless Pomodoro countdown tray
//!
//! This library provides the countdown state machine, the planner that turns
//! timer state into what the tray shows, and the host plumbing (refresh task,
//! tray rendering and a menu command surface) around them.

pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod tasks;
pub mod tray;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::{Config, TimerConfig};
pub use error::TimerError;
pub use render::{plan, DisplayDescriptor};
pub use state::{AppState, TimerMachine, TimerState};
pub use utils::signals::shutdown_signal;
