//! Rendering module
//!
//! Turns timer state into the descriptor the tray draws from.

pub mod display;
pub mod planner;

pub use display::{ActionDescriptor, DisplayDescriptor, IconSelector};
pub use planner::plan;
