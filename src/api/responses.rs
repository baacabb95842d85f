//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{render::DisplayDescriptor, state::{TimerSnapshot, TimerState}};

/// Response to a menu command
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub state: TimerState,
    pub remaining_seconds: u64,
    pub display: DisplayDescriptor,
}

impl CommandResponse {
    pub fn from_snapshot(snapshot: TimerSnapshot) -> Self {
        Self {
            status: snapshot.state.name().to_string(),
            timestamp: snapshot.at,
            state: snapshot.state,
            remaining_seconds: snapshot.remaining_seconds,
            display: snapshot.display,
        }
    }
}

/// Error body for rejected commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Status response with timer and display information
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub state: TimerState,
    pub remaining_seconds: u64,
    pub display: DisplayDescriptor,
    pub icon: String,
    pub duration_minutes: u32,
    pub config_error: Option<String>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
