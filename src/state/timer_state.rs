//! Timer state: exactly one variant is active at a time

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::time::elapsed_seconds;

/// Where the countdown currently is. Each variant carries only the data
/// meaningful to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TimerState {
    /// No session in progress
    #[default]
    Idle,
    /// Counting down since `started_at`
    Running { started_at: DateTime<Utc> },
    /// Counting frozen at `elapsed_seconds`
    Paused { elapsed_seconds: u64 },
    /// Reached zero at `since`. `blink` is the display heartbeat.
    Finished { since: DateTime<Utc>, blink: bool },
}

impl TimerState {
    pub fn name(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running { .. } => "running",
            TimerState::Paused { .. } => "paused",
            TimerState::Finished { .. } => "finished",
        }
    }

    /// Seconds consumed in the current session, capped at the session length
    pub fn elapsed_seconds(&self, now: DateTime<Utc>, session_seconds: u64) -> u64 {
        match *self {
            TimerState::Idle => 0,
            TimerState::Running { started_at } => {
                elapsed_seconds(started_at, now).min(session_seconds)
            }
            TimerState::Paused { elapsed_seconds } => elapsed_seconds.min(session_seconds),
            TimerState::Finished { .. } => session_seconds,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TimerState::Idle)
    }
}
