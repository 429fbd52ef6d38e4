// Simulated native engines.
//
// Stand-ins for the real decode/transcode and GL rendering engines, so the
// session and surface plumbing can be exercised end to end without codecs or
// a GPU. The media engine pushes progress updates on a tokio interval the
// same way a real pipeline reports at its own cadence.

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use streamer_core::engine::{MediaEngine, RenderEngine};
use streamer_core::errors::EngineError;
use streamer_core::types::EngineUpdate;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};
use tracing::{debug, info};

const STATE_READY: u8 = 1;
const STATE_STARTED: u8 = 2;
const STATE_PAUSED: u8 = 3;
const STATE_STOPPED: u8 = 4;

// ============================================================================
// Simulated Media Engine
// ============================================================================

pub struct SimulatedMediaEngine {
    duration_ms: u64,
    tick_ms: u64,
    shared: Arc<EngineShared>,
}

struct EngineShared {
    position_ms: AtomicU64,
    state_code: AtomicU8,
}

impl SimulatedMediaEngine {
    pub fn new(duration_ms: u64, tick_ms: u64) -> Self {
        Self {
            duration_ms,
            tick_ms,
            shared: Arc::new(EngineShared {
                position_ms: AtomicU64::new(0),
                state_code: AtomicU8::new(0),
            }),
        }
    }
}

#[async_trait]
impl MediaEngine for SimulatedMediaEngine {
    async fn create(
        &mut self,
        source: &Path,
        destination: &Path,
    ) -> Result<mpsc::Receiver<EngineUpdate>, EngineError> {
        info!("Simulated engine: opening {:?} -> {:?}", source, destination);
        self.shared.state_code.store(STATE_READY, Ordering::Relaxed);

        let (tx, rx) = mpsc::channel(100);
        let shared = Arc::clone(&self.shared);
        let duration_ms = self.duration_ms;
        let tick_ms = self.tick_ms;

        // Push loop: advances position while started and reports the current
        // snapshot every tick until the pipeline stops.
        tokio::spawn(async move {
            let mut timer = interval(Duration::from_millis(tick_ms));
            loop {
                timer.tick().await;
                let code = shared.state_code.load(Ordering::Relaxed);
                if code >= STATE_STOPPED {
                    break;
                }
                if code == STATE_STARTED {
                    let position = (shared.position_ms.load(Ordering::Relaxed) + tick_ms)
                        .min(duration_ms);
                    shared.position_ms.store(position, Ordering::Relaxed);
                }
                let update = EngineUpdate {
                    duration_ms,
                    position_ms: shared.position_ms.load(Ordering::Relaxed),
                    state_code: code,
                };
                if tx.send(update).await.is_err() {
                    break;
                }
            }
            debug!("Simulated engine: push loop ended");
        });

        Ok(rx)
    }

    async fn start(&mut self) -> Result<(), EngineError> {
        self.shared.state_code.store(STATE_STARTED, Ordering::Relaxed);
        Ok(())
    }

    async fn pause(&mut self) -> Result<(), EngineError> {
        self.shared.state_code.store(STATE_PAUSED, Ordering::Relaxed);
        Ok(())
    }

    async fn resume(&mut self) -> Result<(), EngineError> {
        self.shared.state_code.store(STATE_STARTED, Ordering::Relaxed);
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), EngineError> {
        self.shared.state_code.store(STATE_STOPPED, Ordering::Relaxed);
        Ok(())
    }

    async fn clean(&mut self) -> Result<(), EngineError> {
        self.shared.state_code.store(STATE_STOPPED, Ordering::Relaxed);
        info!("Simulated engine: resources released");
        Ok(())
    }
}

// ============================================================================
// Simulated Render Engine
// ============================================================================

pub struct SimulatedRenderEngine {
    frames: Arc<AtomicU64>,
}

impl SimulatedRenderEngine {
    pub fn new(frames: Arc<AtomicU64>) -> Self {
        Self { frames }
    }
}

impl RenderEngine for SimulatedRenderEngine {
    fn init(&mut self) -> Result<(), EngineError> {
        info!("Simulated renderer: context initialized");
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        debug!("Simulated renderer: viewport {}x{}", width, height);
    }

    fn draw(&mut self) {
        let drawn = self.frames.fetch_add(1, Ordering::Relaxed) + 1;
        if drawn % 120 == 0 {
            debug!("Simulated renderer: {} frames drawn", drawn);
        }
    }
}
