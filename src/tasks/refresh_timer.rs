//! Periodic refresh task driving the timer

use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::state::AppState;

/// Background task that ticks the timer every refresh interval until
/// shutdown is requested
pub async fn refresh_timer_task(state: Arc<AppState>) {
    info!(
        "Starting refresh timer task ({}ms interval)",
        state.config.refresh_interval.as_millis()
    );

    let mut shutdown_rx = state.shutdown_tx.subscribe();
    let mut interval = interval(state.config.refresh_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = state.tick() {
                    error!("Failed to refresh timer: {}", e);
                }
            }
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    info!("Refresh timer task stopped");
}
