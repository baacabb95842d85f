//! Render planner: timer state + now -> display descriptor
//!
//! Pure. Hosts that want to avoid redundant widget writes diff the
//! descriptors themselves.

use chrono::{DateTime, Utc};

use super::display::{ActionDescriptor, DisplayDescriptor, IconSelector};
use crate::{
    config::TimerConfig,
    state::TimerState,
    utils::time::{format_clock, remaining_seconds, rounded_minutes},
};

pub const IDLE_LABEL: &str = "------";
pub const FINISHED_LABEL: &str = "Finished";
pub const PAUSE_TEXT: &str = "Pause";
pub const STOP_TEXT: &str = "Stop";

/// Compute what the tray should show for `state` at `now`
pub fn plan(state: &TimerState, now: DateTime<Utc>, config: &TimerConfig) -> DisplayDescriptor {
    let start_text = format!("Start ({})", config.duration_minutes);

    match state {
        TimerState::Idle => DisplayDescriptor {
            label: IDLE_LABEL.to_string(),
            icon: IconSelector::Default,
            primary_action: ActionDescriptor::new(start_text, true),
            secondary_action: ActionDescriptor::new(STOP_TEXT, false),
        },
        TimerState::Running { .. } | TimerState::Paused { .. } => {
            let session = config.session_seconds();
            let remaining = remaining_seconds(session, state.elapsed_seconds(now, session));
            let minutes = rounded_minutes(remaining, config.max_minutes);

            let primary_text = match state {
                TimerState::Paused { .. } => format!("Continue ({})", minutes),
                _ => PAUSE_TEXT.to_string(),
            };

            DisplayDescriptor {
                label: format_clock(remaining),
                icon: IconSelector::Minutes(minutes),
                primary_action: ActionDescriptor::new(primary_text, true),
                secondary_action: ActionDescriptor::new(STOP_TEXT, true),
            }
        }
        TimerState::Finished { blink, .. } => DisplayDescriptor {
            label: FINISHED_LABEL.to_string(),
            icon: if *blink {
                IconSelector::Blink
            } else {
                IconSelector::Minutes(0)
            },
            primary_action: ActionDescriptor::new(start_text, true),
            secondary_action: ActionDescriptor::new(STOP_TEXT, true),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerMachine;
    use chrono::Duration;

    fn at(origin: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
        origin + Duration::seconds(seconds)
    }

    #[test]
    fn test_idle_descriptor() {
        let config = TimerConfig::with_duration(25);
        let d = plan(&TimerState::Idle, Utc::now(), &config);
        assert_eq!(d.label, "------");
        assert_eq!(d.icon, IconSelector::Default);
        assert_eq!(d.primary_action, ActionDescriptor::new("Start (25)", true));
        assert_eq!(d.secondary_action, ActionDescriptor::new("Stop", false));
    }

    #[test]
    fn test_running_descriptor() {
        let config = TimerConfig::with_duration(25);
        let t0 = Utc::now();
        let state = TimerState::Running { started_at: t0 };

        let d = plan(&state, at(t0, 1439), &config);
        assert_eq!(d.label, "01:01");
        assert_eq!(d.icon, IconSelector::Minutes(2));
        assert_eq!(d.primary_action, ActionDescriptor::new("Pause", true));
        assert_eq!(d.secondary_action, ActionDescriptor::new("Stop", true));

        let d = plan(&state, t0, &config);
        assert_eq!(d.label, "25:00");
        assert_eq!(d.icon, IconSelector::Minutes(25));
    }

    #[test]
    fn test_running_past_zero_shows_zero() {
        let config = TimerConfig::with_duration(5);
        let t0 = Utc::now();
        let d = plan(&TimerState::Running { started_at: t0 }, at(t0, 320), &config);
        assert_eq!(d.label, "00:00");
        assert_eq!(d.icon, IconSelector::Minutes(0));
    }

    #[test]
    fn test_paused_descriptor_offers_continue() {
        let config = TimerConfig::with_duration(25);
        let state = TimerState::Paused { elapsed_seconds: 30 };
        let d = plan(&state, Utc::now(), &config);
        assert_eq!(d.label, "24:30");
        assert_eq!(d.icon, IconSelector::Minutes(25));
        assert_eq!(d.primary_action, ActionDescriptor::new("Continue (25)", true));
        assert!(d.secondary_action.enabled);
    }

    #[test]
    fn test_icon_rounding_for_remaining_seconds() {
        let config = TimerConfig::with_duration(25);
        let session = 1500;
        for (remaining, minutes) in [(120, 2), (119, 2), (61, 2), (60, 1), (1, 1), (0, 0)] {
            let state = TimerState::Paused {
                elapsed_seconds: session - remaining,
            };
            let d = plan(&state, Utc::now(), &config);
            assert_eq!(d.icon, IconSelector::Minutes(minutes), "{} seconds", remaining);
        }
    }

    #[test]
    fn test_finished_alternates_icon() {
        let config = TimerConfig::with_duration(25);
        let now = Utc::now();

        let d = plan(&TimerState::Finished { since: now, blink: false }, now, &config);
        assert_eq!(d.label, "Finished");
        assert_eq!(d.icon, IconSelector::Minutes(0));
        assert_eq!(d.primary_action, ActionDescriptor::new("Start (25)", true));
        assert!(d.secondary_action.enabled);

        let d = plan(&TimerState::Finished { since: now, blink: true }, now, &config);
        assert_eq!(d.icon, IconSelector::Blink);
    }

    #[test]
    fn test_same_tick_yields_same_descriptor() {
        let config = TimerConfig::with_duration(25);
        let t0 = Utc::now();
        let mut m = TimerMachine::new(&config);
        m.toggle_start(t0);

        for now in [at(t0, 700), at(t0, 1500), at(t0, 1505), at(t0, 1510)] {
            m.tick(now);
            let first = plan(m.state(), now, &config);
            m.tick(now);
            assert_eq!(plan(m.state(), now, &config), first);
        }
    }

    #[test]
    fn test_end_to_end_session() {
        let config = TimerConfig::with_duration(25);
        let t0 = Utc::now();
        let mut m = TimerMachine::new(&config);
        m.toggle_start(t0);

        m.tick(at(t0, 1500));
        assert!(matches!(m.state(), TimerState::Finished { .. }));
        assert_eq!(plan(m.state(), at(t0, 1500), &config).label, "Finished");

        m.tick(at(t0, 1509));
        assert!(matches!(m.state(), TimerState::Finished { .. }));

        m.tick(at(t0, 1510));
        assert_eq!(*m.state(), TimerState::Idle);
        let d = plan(m.state(), at(t0, 1510), &config);
        assert_eq!(d.label, IDLE_LABEL);
        assert!(!d.secondary_action.enabled);
    }
}
