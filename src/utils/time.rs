//! Time math shared by the state machine and the render planner

use chrono::{DateTime, Utc};

pub const SECONDS_PER_MINUTE: u64 = 60;

/// Whole seconds between `start` and `now`. A clock that stepped backwards
/// yields 0 rather than a negative span.
pub fn elapsed_seconds(start: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    (now - start).num_seconds().max(0) as u64
}

/// Seconds left in a session, clamped at 0
pub fn remaining_seconds(session_seconds: u64, elapsed_seconds: u64) -> u64 {
    session_seconds.saturating_sub(elapsed_seconds)
}

/// Minutes left rounded up, so the icon never under-represents time left
pub fn rounded_minutes(remaining_seconds: u64, max_minutes: u32) -> u32 {
    let minutes = remaining_seconds.div_ceil(SECONDS_PER_MINUTE);
    minutes.min(u64::from(max_minutes)) as u32
}

/// `MM:SS`, zero padded
pub fn format_clock(remaining_seconds: u64) -> String {
    format!(
        "{:02}:{:02}",
        remaining_seconds / SECONDS_PER_MINUTE,
        remaining_seconds % SECONDS_PER_MINUTE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_rounded_minutes_rounds_up() {
        let remaining = [120, 119, 61, 60, 1, 0];
        let expected = [2, 2, 2, 1, 1, 0];
        for (seconds, minutes) in remaining.iter().zip(expected) {
            assert_eq!(rounded_minutes(*seconds, 90), minutes, "{} seconds", seconds);
        }
    }

    #[test]
    fn test_rounded_minutes_is_clamped() {
        assert_eq!(rounded_minutes(95 * 60, 90), 90);
    }

    #[test]
    fn test_remaining_never_negative() {
        assert_eq!(remaining_seconds(1500, 30), 1470);
        assert_eq!(remaining_seconds(1500, 1500), 0);
        assert_eq!(remaining_seconds(1500, 1600), 0);
    }

    #[test]
    fn test_elapsed_truncates_and_clamps() {
        let start = Utc::now();
        assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(2999)), 2);
        assert_eq!(elapsed_seconds(start, start - Duration::seconds(5)), 0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
    }
}
