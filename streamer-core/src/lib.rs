pub mod display_time;
pub mod engine;
pub mod errors;
pub mod host;
pub mod session;
pub mod surface;
#[cfg(test)]
mod surface_test;
pub mod types;

// Re-export commonly used types
pub use types::{EngineUpdate, PlaybackProgress, SessionState, SurfaceConfig};

// Re-export error types
pub use errors::{EngineError, SessionError, SurfaceError, TimeError};

// Re-export core components
pub use display_time::DisplayTime;
pub use engine::{MediaEngine, RenderEngine};
pub use host::SessionHost;
pub use session::StreamingSession;
pub use surface::RenderSurfaceController;
