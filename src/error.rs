//! Error types shared by the timer core and its host

use thiserror::Error;

/// Everything the timer core can report back to its caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The configured duration was unparsable or outside the allowed range.
    /// Recovered by falling back to the default duration.
    #[error("{0}")]
    Configuration(String),

    /// A command was issued from a state that has no transition for it
    #[error("Invalid application state: cannot {command} while {state}")]
    InvalidState {
        command: &'static str,
        state: &'static str,
    },

    #[error("Failed to lock timer state: {0}")]
    LockPoisoned(String),
}
