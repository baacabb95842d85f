//! Render task applying display descriptors to the tray

use std::sync::Arc;
use tracing::{debug, info};

use crate::{config::configuration_error_title, state::AppState, tray::DisplaySink};

/// Background task that draws every new descriptor and tears the tray down
/// on shutdown. Returns the sink so the caller can inspect it afterwards.
pub async fn tray_render_task<S: DisplaySink>(state: Arc<AppState>, mut sink: S) -> S {
    info!("Starting tray render task");

    if let Some(reason) = &state.config_error {
        sink.show_error(&configuration_error_title(), reason);
    }

    let mut display_rx = state.display_tx.subscribe();
    let mut shutdown_rx = state.shutdown_tx.subscribe();

    let initial = display_rx.borrow_and_update().clone();
    sink.apply(&initial);

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            biased;

            changed = display_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let descriptor = display_rx.borrow_and_update().clone();
                debug!("Applying descriptor: {}", descriptor.label);
                sink.apply(&descriptor);
            }
            changed = shutdown_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    sink.teardown();
    info!("Tray render task stopped");
    sink
}
