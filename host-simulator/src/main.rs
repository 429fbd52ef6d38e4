mod config;
mod sim;

use anyhow::Result;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use streamer_core::{
    DisplayTime, PlaybackProgress, RenderSurfaceController, SessionHost, StreamingSession,
    SurfaceConfig,
};
use tokio::sync::{oneshot, watch};
use tokio::time::{interval, sleep, Duration};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志 - 使用环境变量 RUST_LOG 控制级别
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("🎥 Host simulator starting...");

    let config = config::Config::load(Path::new("host-simulator.toml"))?;
    info!("✓ Configuration loaded");
    info!("  Source: {:?}", config.source);
    info!("  Destination: {:?}", config.destination);

    // Session-control domain: build the session and launch create + start.
    let engine = sim::SimulatedMediaEngine::new(config.media_duration_ms, 250);
    let mut session = StreamingSession::new(Box::new(engine));
    session.set_locations(&config.source, &config.destination)?;
    let mut host = SessionHost::new(session);

    host.launch();
    host.wait_ready().await?;
    info!("✅ Session started");

    let progress = host.session().lock().await.subscribe();

    // Render domain: the surface lives on its own task, ticked at the display
    // refresh rate, decoupled from session-control timing.
    let frame_count = Arc::new(AtomicU64::new(0));
    let renderer = sim::SimulatedRenderEngine::new(Arc::clone(&frame_count));
    let mut surface = RenderSurfaceController::new(SurfaceConfig::default(), Box::new(renderer));
    surface.on_surface_created()?;
    surface.on_surface_changed(config.surface_width, config.surface_height)?;

    let refresh = Duration::from_micros(1_000_000 / u64::from(config.refresh_rate_hz.max(1)));
    let (vsync_stop, mut vsync_stopped) = oneshot::channel::<()>();
    let render_task = tokio::spawn(async move {
        let mut vsync = interval(refresh);
        loop {
            tokio::select! {
                _ = &mut vsync_stopped => break,
                _ = vsync.tick() => {
                    if let Err(err) = surface.on_draw_frame() {
                        warn!("Draw failed: {}", err);
                        break;
                    }
                }
            }
        }
    });

    // Simulated UI lifecycle: foreground, background, foreground again.
    sleep(Duration::from_millis(config.foreground_ms)).await;
    log_progress(&progress)?;

    info!("UI backgrounded");
    host.on_pause().await?;
    sleep(Duration::from_millis(config.background_ms)).await;

    info!("UI foregrounded");
    host.on_resume().await?;
    sleep(Duration::from_millis(config.foreground_ms)).await;
    log_progress(&progress)?;

    // Teardown: release native resources, then stop the render domain.
    host.shutdown().await?;
    let _ = vsync_stop.send(());
    render_task.await?;

    info!(
        "✅ Session released; {} frames drawn",
        frame_count.load(Ordering::Relaxed)
    );
    Ok(())
}

fn log_progress(progress: &watch::Receiver<PlaybackProgress>) -> Result<()> {
    let snapshot = *progress.borrow();
    let position = DisplayTime::from_millis(snapshot.position_ms as i64)?;
    let duration = DisplayTime::from_millis(snapshot.duration_ms as i64)?;
    info!("  Position: {} / {}", position, duration);
    Ok(())
}
