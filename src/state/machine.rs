//! Countdown state machine
//!
//! Owns the single [`TimerState`] and advances it in response to the two
//! menu commands and to periodic ticks. All calls take the host's notion of
//! "now"; the machine never reads a clock itself.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use super::TimerState;
use crate::{
    config::TimerConfig,
    error::TimerError,
    utils::time::{elapsed_seconds, remaining_seconds},
};

#[derive(Debug, Clone)]
pub struct TimerMachine {
    state: TimerState,
    session_seconds: u64,
    finished_display_seconds: u64,
    last_tick: Option<DateTime<Utc>>,
}

impl TimerMachine {
    /// Create an idle machine for the given configuration
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            state: TimerState::Idle,
            session_seconds: config.session_seconds(),
            finished_display_seconds: config.finished_display_seconds,
            last_tick: None,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn session_seconds(&self) -> u64 {
        self.session_seconds
    }

    /// Seconds left in the current session as of `now`
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> u64 {
        remaining_seconds(
            self.session_seconds,
            self.state.elapsed_seconds(now, self.session_seconds),
        )
    }

    /// Start, pause, continue or restart depending on the current state
    pub fn toggle_start(&mut self, now: DateTime<Utc>) -> TimerState {
        let next = match self.state {
            TimerState::Idle | TimerState::Finished { .. } => TimerState::Running { started_at: now },
            TimerState::Running { .. } => TimerState::Paused {
                elapsed_seconds: self.state.elapsed_seconds(now, self.session_seconds),
            },
            TimerState::Paused { elapsed_seconds } => TimerState::Running {
                started_at: now - Duration::seconds(elapsed_seconds as i64),
            },
        };

        self.transition(next);
        next
    }

    /// Abandon the current session. Only valid while a session exists.
    pub fn stop(&mut self) -> Result<TimerState, TimerError> {
        if self.state.is_idle() {
            return Err(TimerError::InvalidState {
                command: "stop",
                state: self.state.name(),
            });
        }

        self.transition(TimerState::Idle);
        Ok(TimerState::Idle)
    }

    /// Advance on the passage of time. Performs at most one transition and
    /// returns whether one happened.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let advanced = self.last_tick.map_or(true, |last| now > last);
        if advanced {
            self.last_tick = Some(now);
        }

        match self.state {
            TimerState::Idle | TimerState::Paused { .. } => false,
            TimerState::Running { started_at } => {
                let finished_at = started_at + Duration::seconds(self.session_seconds as i64);
                if now < finished_at {
                    return false;
                }
                self.transition(TimerState::Finished {
                    since: finished_at,
                    blink: false,
                });
                true
            }
            TimerState::Finished { since, blink } => {
                if elapsed_seconds(since, now) >= self.finished_display_seconds {
                    self.transition(TimerState::Idle);
                    return true;
                }
                if advanced {
                    debug!("Finished blink {}", !blink);
                    self.state = TimerState::Finished { since, blink: !blink };
                }
                false
            }
        }
    }

    fn transition(&mut self, next: TimerState) {
        info!("Timer {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}
