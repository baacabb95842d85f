//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::error::TimerError;

pub const DEFAULT_DURATION_MINUTES: u32 = 25;
pub const MIN_MINUTES: u32 = 5;
pub const MAX_MINUTES: u32 = 90;
pub const REFRESH_INTERVAL_MS: u64 = 250;
pub const FINISHED_DISPLAY_SECONDS: u64 = 10;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-tray")]
#[command(about = "A headless Pomodoro countdown tray with a menu command surface")]
#[command(version)]
pub struct Config {
    /// Work interval duration in minutes (5...90)
    #[arg(short, long, default_value = "25")]
    pub duration: String,

    /// How often the timer is refreshed, in milliseconds
    #[arg(long, default_value = "250", value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_interval_ms: u64,

    /// How long the finished display blinks before resetting, in seconds
    #[arg(long, default_value = "10")]
    pub finished_seconds: u64,

    /// Port the menu surface binds to
    #[arg(short, long, default_value = "20525")]
    pub port: u16,

    /// Host address the menu surface binds to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the timer configuration, falling back to the default duration
    /// when the configured one is rejected. The rejection is handed back so
    /// the host can display it.
    pub fn timer_config(&self) -> (TimerConfig, Option<TimerError>) {
        TimerConfig::from_setting(
            &self.duration,
            Duration::from_millis(self.refresh_interval_ms),
            self.finished_seconds,
        )
    }
}

/// Immutable timer settings, fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    pub duration_minutes: u32,
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub refresh_interval: Duration,
    pub finished_display_seconds: u64,
}

impl TimerConfig {
    /// Build a configuration from a raw duration setting
    pub fn from_setting(
        raw_duration: &str,
        refresh_interval: Duration,
        finished_display_seconds: u64,
    ) -> (Self, Option<TimerError>) {
        let mut config = Self {
            refresh_interval,
            finished_display_seconds,
            ..Self::default()
        };
        let rejection = config.apply_duration_setting(raw_duration).err();
        (config, rejection)
    }

    /// Replace the duration with a raw setting, checked against this
    /// config's bounds. A rejected setting leaves the duration unchanged.
    pub fn apply_duration_setting(&mut self, raw_duration: &str) -> Result<(), TimerError> {
        self.duration_minutes = validate_duration(raw_duration, self.min_minutes, self.max_minutes)?;
        Ok(())
    }

    /// Same defaults as the CLI, with a specific duration
    pub fn with_duration(duration_minutes: u32) -> Self {
        Self {
            duration_minutes,
            ..Self::default()
        }
    }

    /// Length of one countdown session in seconds
    pub fn session_seconds(&self) -> u64 {
        u64::from(self.duration_minutes) * 60
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_DURATION_MINUTES,
            min_minutes: MIN_MINUTES,
            max_minutes: MAX_MINUTES,
            refresh_interval: Duration::from_millis(REFRESH_INTERVAL_MS),
            finished_display_seconds: FINISHED_DISPLAY_SECONDS,
        }
    }
}

/// Parse a duration setting and check it against `[min, max]`
pub fn validate_duration(raw: &str, min: u32, max: u32) -> Result<u32, TimerError> {
    let minutes: i64 = raw.trim().parse().map_err(|e| {
        TimerError::Configuration(format!("Invalid duration '{}': {}", raw.trim(), e))
    })?;

    if minutes < i64::from(min) || minutes > i64::from(max) {
        return Err(TimerError::Configuration(format!(
            "Duration should be {}...{} minutes.",
            min, max
        )));
    }

    Ok(minutes as u32)
}

/// Title shown with a configuration error
pub fn configuration_error_title() -> String {
    format!(
        "Configuration error. Set duration to {} minutes",
        DEFAULT_DURATION_MINUTES
    )
}
