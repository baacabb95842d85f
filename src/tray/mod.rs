//! Tray module
//!
//! Host-side rendering: the icon lookup table and the display sinks that
//! descriptors are applied to.

pub mod icons;
pub mod sink;

pub use icons::IconTable;
pub use sink::{DisplaySink, TracingSink};
