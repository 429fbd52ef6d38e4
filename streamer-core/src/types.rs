// ============================================================================
// Session State
// ============================================================================

/// Lifecycle state of a streaming session.
///
/// The first five states map 1:1 to the native engine's wire codes 0-4.
/// `Released` is reached only locally, after the native resources have been
/// cleaned, and is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
    Started,
    Paused,
    Stopped,
    Released,
}

impl SessionState {
    /// Map a native engine state code to a session state.
    ///
    /// Returns `None` for codes outside 0-4; `Released` has no wire code.
    pub fn from_code(code: u8) -> Option<SessionState> {
        match code {
            0 => Some(SessionState::Uninitialized),
            1 => Some(SessionState::Ready),
            2 => Some(SessionState::Started),
            3 => Some(SessionState::Paused),
            4 => Some(SessionState::Stopped),
            _ => None,
        }
    }

    /// True once the session can no longer issue native calls.
    pub fn is_released(&self) -> bool {
        matches!(self, SessionState::Released)
    }
}

// ============================================================================
// Engine Progress Updates
// ============================================================================

/// Raw progress push from the native engine's out-of-band channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineUpdate {
    pub duration_ms: u64,
    pub position_ms: u64,
    pub state_code: u8,
}

/// Latest playback snapshot republished by the session.
///
/// Produced by a single writer (the session's forwarder task); any number of
/// observers read it without locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackProgress {
    pub duration_ms: u64,
    pub position_ms: u64,
    pub engine_state: SessionState,
}

impl Default for PlaybackProgress {
    fn default() -> Self {
        Self {
            duration_ms: 0,
            position_ms: 0,
            engine_state: SessionState::Uninitialized,
        }
    }
}

// ============================================================================
// Render Surface Configuration
// ============================================================================

/// Pixel format and context parameters for the rendering surface.
///
/// Fixed at controller construction; the platform surface is configured once
/// from these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub red_bits: u8,
    pub green_bits: u8,
    pub blue_bits: u8,
    pub alpha_bits: u8,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    pub gles_version: u8,
}

impl Default for SurfaceConfig {
    /// RGB888 with a 16-bit depth buffer on a GLES 3 context.
    fn default() -> Self {
        Self {
            red_bits: 8,
            green_bits: 8,
            blue_bits: 8,
            alpha_bits: 0,
            depth_bits: 16,
            stencil_bits: 0,
            gles_version: 3,
        }
    }
}
