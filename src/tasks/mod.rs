//! Background tasks module
//!
//! This module contains the tasks that run alongside the menu surface.

pub mod refresh_timer;
pub mod tray_render;

// Re-export main functions
pub use refresh_timer::refresh_timer_task;
pub use tray_render::tray_render_task;
