use crate::errors::EngineError;
use crate::types::EngineUpdate;
use async_trait::async_trait;
use std::path::Path;
use tokio::sync::mpsc;

// ============================================================================
// Native Media Engine Capability
// ============================================================================

/// Capability surface of the native media engine.
///
/// Every call returns an explicit result so the session state machine can
/// react deterministically to native failure. `create` may perform blocking
/// I/O (opening the source, allocating codecs) and therefore suspends; the
/// remaining calls are expected to return promptly.
#[async_trait]
pub trait MediaEngine: Send + Sync {
    /// Open the source, prepare codecs and the destination muxer.
    ///
    /// On success hands back the engine's out-of-band push channel, which
    /// delivers `(duration, position, state)` updates at the engine's own
    /// cadence until `clean` drops the sending side.
    async fn create(
        &mut self,
        source: &Path,
        destination: &Path,
    ) -> Result<mpsc::Receiver<EngineUpdate>, EngineError>;

    /// Begin decoding and transcoding.
    async fn start(&mut self) -> Result<(), EngineError>;

    /// Suspend the pipeline without releasing resources.
    async fn pause(&mut self) -> Result<(), EngineError>;

    /// Continue a paused pipeline.
    async fn resume(&mut self) -> Result<(), EngineError>;

    /// Halt the pipeline; resources stay allocated until `clean`.
    async fn stop(&mut self) -> Result<(), EngineError>;

    /// Release all native resources. The engine is unusable afterwards.
    async fn clean(&mut self) -> Result<(), EngineError>;
}

// ============================================================================
// Native Render Engine Capability
// ============================================================================

/// Capability surface of the native rendering engine.
///
/// `resize` and `draw` are non-blocking once `init` has completed; `draw`
/// pulls the latest decoded frame and must finish well under one frame
/// interval.
pub trait RenderEngine: Send {
    fn init(&mut self) -> Result<(), EngineError>;

    fn resize(&mut self, width: u32, height: u32);

    fn draw(&mut self);
}
