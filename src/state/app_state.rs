//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{TimerMachine, TimerState};
use crate::{
    config::TimerConfig,
    error::TimerError,
    render::{plan, DisplayDescriptor},
    tray::IconTable,
    utils::Clock,
};

/// State, remaining time and descriptor captured at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub at: DateTime<Utc>,
    pub state: TimerState,
    pub remaining_seconds: u64,
    pub display: DisplayDescriptor,
}

/// Shared state the host works through. Ticks and menu commands are
/// serialized on the machine's mutex.
pub struct AppState {
    /// Timer configuration, fixed at startup
    pub config: TimerConfig,
    /// Why the configured duration was rejected, if it was
    pub config_error: Option<String>,
    /// Icon lookup, built once from the configured range
    pub icons: IconTable,
    clock: Arc<dyn Clock>,
    machine: Mutex<TimerMachine>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Latest descriptor; only notifies when it actually changed
    pub display_tx: watch::Sender<DisplayDescriptor>,
    /// Keep the receiver alive to prevent channel closure
    pub _display_rx: watch::Receiver<DisplayDescriptor>,
    /// Flipped to true when the process should exit
    pub shutdown_tx: watch::Sender<bool>,
}

impl AppState {
    /// Create an idle AppState
    pub fn new(
        config: TimerConfig,
        config_error: Option<TimerError>,
        clock: Arc<dyn Clock>,
        port: u16,
        host: String,
    ) -> Self {
        let machine = TimerMachine::new(&config);
        let initial = plan(machine.state(), clock.now(), &config);
        let (display_tx, display_rx) = watch::channel(initial);
        let (shutdown_tx, _) = watch::channel(false);
        let icons = IconTable::new(config.max_minutes);

        Self {
            config,
            config_error: config_error.map(|e| e.to_string()),
            icons,
            clock,
            machine: Mutex::new(machine),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            display_tx,
            _display_rx: display_rx,
            shutdown_tx,
        }
    }

    fn lock_machine(&self) -> Result<MutexGuard<'_, TimerMachine>, TimerError> {
        self.machine
            .lock()
            .map_err(|e| TimerError::LockPoisoned(e.to_string()))
    }

    /// Run `f` against the machine, then publish the resulting descriptor
    fn with_machine<F>(&self, action: Option<&str>, f: F) -> Result<TimerSnapshot, TimerError>
    where
        F: FnOnce(&mut TimerMachine, DateTime<Utc>) -> Result<(), TimerError>,
    {
        let mut machine = self.lock_machine()?;
        let now = self.clock.now();

        f(&mut machine, now)?;

        let snapshot = TimerSnapshot {
            at: now,
            state: *machine.state(),
            remaining_seconds: machine.remaining_seconds(now),
            display: plan(machine.state(), now, &self.config),
        };

        // Publish under the lock so descriptors leave in transition order
        if let Some(action) = action {
            self.record_action(action, now);
        }
        self.publish(&snapshot.display);
        drop(machine);

        Ok(snapshot)
    }

    /// Start / Pause / Continue menu item
    pub fn toggle_start(&self) -> Result<TimerSnapshot, TimerError> {
        self.with_machine(Some("toggle"), |machine, now| {
            machine.toggle_start(now);
            Ok(())
        })
    }

    /// Stop menu item
    pub fn stop(&self) -> Result<TimerSnapshot, TimerError> {
        self.with_machine(Some("stop"), |machine, _| {
            machine.stop().map(|_| ()).map_err(|e| {
                warn!("Rejected menu command: {}", e);
                e
            })
        })
    }

    /// Periodic refresh
    pub fn tick(&self) -> Result<TimerSnapshot, TimerError> {
        self.with_machine(None, |machine, now| {
            if machine.tick(now) {
                debug!("Tick at {} changed state to {}", now, machine.state().name());
            }
            Ok(())
        })
    }

    /// Current state without advancing it
    pub fn snapshot(&self) -> Result<TimerSnapshot, TimerError> {
        self.with_machine(None, |_, _| Ok(()))
    }

    /// Close menu item
    pub fn request_shutdown(&self) {
        info!("Shutdown requested");
        self.shutdown_tx.send_replace(true);
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    fn publish(&self, display: &DisplayDescriptor) {
        self.display_tx.send_if_modified(|current| {
            if current == display {
                false
            } else {
                *current = display.clone();
                true
            }
        });
    }

    fn record_action(&self, action: &str, at: DateTime<Utc>) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(at);
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
