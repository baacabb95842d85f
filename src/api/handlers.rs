//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info};

use crate::{error::TimerError, state::AppState};
use super::responses::{CommandResponse, ErrorResponse, HealthResponse, StatusResponse};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(e: TimerError) -> ApiError {
    let status = match e {
        TimerError::InvalidState { .. } => StatusCode::CONFLICT,
        _ => {
            error!("Timer command failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}

/// Handle POST /toggle - Start, pause, continue or restart
pub async fn toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, ApiError> {
    let snapshot = state.toggle_start().map_err(api_error)?;
    info!("Toggle menu item - timer {}", snapshot.state.name());
    Ok(Json(CommandResponse::from_snapshot(snapshot)))
}

/// Handle POST /stop - Abandon the current session
pub async fn stop_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, ApiError> {
    let snapshot = state.stop().map_err(api_error)?;
    info!("Stop menu item - timer reset");
    Ok(Json(CommandResponse::from_snapshot(snapshot)))
}

/// Handle POST /close - Exit the application
pub async fn close_handler(State(state): State<Arc<AppState>>) -> StatusCode {
    info!("Close menu item");
    state.request_shutdown();
    StatusCode::ACCEPTED
}

/// Handle GET /status - Return what the tray is currently showing
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let snapshot = state.snapshot().map_err(api_error)?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        icon: state.icons.resolve(snapshot.display.icon).to_string(),
        state: snapshot.state,
        remaining_seconds: snapshot.remaining_seconds,
        display: snapshot.display,
        duration_minutes: state.config.duration_minutes,
        config_error: state.config_error.clone(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
