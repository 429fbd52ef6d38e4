use crate::types::SessionState;
use std::io;
use thiserror::Error;

// ============================================================================
// Native Engine Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Native engine failure: {reason}")]
    Failed { reason: String },
}

// ============================================================================
// Session Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session misconfigured: {reason}")]
    Configuration { reason: String },

    #[error("Cannot {operation} from state {state:?}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    #[error("Native engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Session launch failed: {reason}")]
    Launch { reason: String },
}

// ============================================================================
// Render Surface Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Surface not created: {operation} called before onSurfaceCreated")]
    NotInitialized { operation: &'static str },

    #[error("Render engine error: {0}")]
    Engine(#[from] EngineError),
}

// ============================================================================
// Display Time Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Invalid duration: {millis} ms is negative")]
    InvalidDuration { millis: i64 },
}
