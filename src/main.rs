//! Pomodoro Panel - a tick-driven Pomodoro timer for 64x64 pixel displays
//!
//! This is the host binary: it reads the settings, streams surface commands
//! as JSON lines and optionally serves a status API.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    sync::Arc,
};

use anyhow::Context;
use tokio::{net::TcpListener, sync::watch};
use tracing::info;

use pomodoro_panel::{
    api::{create_router, StatusState},
    config::Config,
    tasks::display_loop_task,
    utils::shutdown_signal,
    JsonLinesSurface, PomodoroController, SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout may carry surface commands
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_panel={},tower_http=info", config.log_level()))
        .with_writer(io::stderr)
        .init();

    info!("Starting pomodoro-panel v{}", env!("CARGO_PKG_VERSION"));

    let settings = config.timer_settings();
    info!("Timer settings: {:?}", settings);

    let writer: Box<dyn Write + Send> = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            info!("Writing surface commands to {}", path.display());
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    let controller = PomodoroController::new(
        settings,
        JsonLinesSurface::new(writer),
        SystemClock::new(),
    );
    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());

    if let Some(addr) = config.status_address() {
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind status API on {}", addr))?;
        let app = create_router(Arc::new(StatusState::new(snapshot_rx)));

        info!("Status API running on http://{}", addr);
        info!("Endpoints:");
        info!("  GET  /status     - Current phase, countdown and progress");
        info!("  GET  /health     - Health check");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Status API error: {}", e);
            }
        });
    }

    tokio::select! {
        _ = display_loop_task(controller, config.poll_period(), snapshot_tx) => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Shutdown complete");
    Ok(())
}
