//! Pomodoro Tray - a headless Pomodoro countdown tray
//!
//! This is the main entry point for the pomodoro-tray application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use pomodoro_tray::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::{refresh_timer_task, tray_render_task},
    tray::TracingSink,
    utils::{shutdown_signal, SystemClock},
};

// Ticks and menu commands share one thread
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_tray={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-tray v{}", env!("CARGO_PKG_VERSION"));

    let (timer_config, rejection) = config.timer_config();
    if let Some(e) = &rejection {
        warn!("{}; using {} minutes", e, timer_config.duration_minutes);
    }
    info!(
        "Configuration: host={}, port={}, duration={}min, refresh={}ms",
        config.host,
        config.port,
        timer_config.duration_minutes,
        timer_config.refresh_interval.as_millis()
    );

    let state = Arc::new(AppState::new(
        timer_config,
        rejection,
        Arc::new(SystemClock),
        config.port,
        config.host.clone(),
    ));

    let sink = TracingSink::new(state.icons.clone());
    let render = tokio::spawn(tray_render_task(Arc::clone(&state), sink));
    let refresh = tokio::spawn(refresh_timer_task(Arc::clone(&state)));

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Menu running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle - Start / Pause / Continue");
    info!("  POST /stop   - Stop the current session");
    info!("  POST /close  - Close the application");
    info!("  GET  /status - Current timer and tray display");
    info!("  GET  /health - Health check");

    let server = axum::serve(listener, app);
    let mut close_rx = state.shutdown_tx.subscribe();

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
        _ = close_rx.wait_for(|closing| *closing) => {
            info!("Close requested from menu");
        }
    }

    // Stop ticking and hide the tray
    state.request_shutdown();
    if let Err(e) = refresh.await {
        error!("Refresh task failed: {}", e);
    }
    if let Err(e) = render.await {
        error!("Render task failed: {}", e);
    }

    info!("Shutdown complete");
    Ok(())
}
