use crate::engine::MediaEngine;
use crate::errors::{EngineError, SessionError};
use crate::types::{EngineUpdate, PlaybackProgress, SessionState};
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

// ============================================================================
// Streaming Session State Machine
// ============================================================================

/// One end-to-end create -> start/pause/resume -> stop -> clean cycle of the
/// native media engine, bound to one source/destination pair.
///
/// The session owns the decision of when native calls are issued and
/// republishes the engine's progress pushes through a watch channel. It never
/// blocks waiting for the engine's cadence and never polls it synchronously.
pub struct StreamingSession {
    engine: Box<dyn MediaEngine>,
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
    state: SessionState,
    progress_tx: watch::Sender<PlaybackProgress>,
}

impl StreamingSession {
    pub fn new(engine: Box<dyn MediaEngine>) -> Self {
        let (progress_tx, _) = watch::channel(PlaybackProgress::default());
        Self {
            engine,
            source: None,
            destination: None,
            state: SessionState::Uninitialized,
            progress_tx,
        }
    }

    /// Assign the source and destination locations.
    ///
    /// Locations are set once, before the session enters its active phase,
    /// and are immutable for the rest of its lifetime.
    pub fn set_locations(
        &mut self,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Result<(), SessionError> {
        if self.state != SessionState::Uninitialized {
            return Err(SessionError::InvalidState {
                operation: "set_locations",
                state: self.state,
            });
        }
        self.source = Some(source.into());
        self.destination = Some(destination.into());
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Subscribe to the latest playback snapshot.
    ///
    /// Either timing domain may read the snapshot without locking; the only
    /// writer is the session's forwarder task.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackProgress> {
        self.progress_tx.subscribe()
    }

    /// Latest republished playback snapshot.
    pub fn progress(&self) -> PlaybackProgress {
        *self.progress_tx.borrow()
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Uninitialized -> Ready. Opens the source and destination through the
    /// native engine and starts republishing its progress pushes.
    ///
    /// May suspend while the engine performs blocking I/O. There is no
    /// mid-flight cancellation; callers that were torn down meanwhile must
    /// re-check `state()` before issuing further calls.
    pub async fn create(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Uninitialized {
            return Err(SessionError::InvalidState {
                operation: "create",
                state: self.state,
            });
        }

        let (source, destination) = match (&self.source, &self.destination) {
            (Some(source), Some(destination))
                if !source.as_os_str().is_empty() && !destination.as_os_str().is_empty() =>
            {
                (source.clone(), destination.clone())
            }
            _ => {
                return Err(SessionError::Configuration {
                    reason: "source and destination locations must be set before create"
                        .to_string(),
                })
            }
        };

        debug!("Creating session: {:?} -> {:?}", source, destination);

        match self.engine.create(&source, &destination).await {
            Ok(updates) => {
                self.spawn_forwarder(updates);
                self.state = SessionState::Ready;
                info!("Session ready");
                Ok(())
            }
            Err(err) => {
                // The engine may have partially allocated; park in Stopped so
                // clean stays reachable.
                self.state = SessionState::Stopped;
                Err(SessionError::Engine(err))
            }
        }
    }

    /// Ready -> Started.
    pub async fn start(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Ready {
            return Err(SessionError::InvalidState {
                operation: "start",
                state: self.state,
            });
        }

        match self.engine.start().await {
            Ok(()) => {
                self.state = SessionState::Started;
                info!("Playback started");
                Ok(())
            }
            Err(err) => self.fail_stopped(err),
        }
    }

    /// Started -> Paused. A no-op when already paused, so duplicate UI
    /// lifecycle events need no caller-side state tracking.
    pub async fn pause(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Paused => {
                debug!("pause: already paused");
                Ok(())
            }
            SessionState::Started => match self.engine.pause().await {
                Ok(()) => {
                    self.state = SessionState::Paused;
                    info!("Playback paused");
                    Ok(())
                }
                Err(err) => self.fail_stopped(err),
            },
            state => Err(SessionError::InvalidState {
                operation: "pause",
                state,
            }),
        }
    }

    /// Paused -> Started. A no-op when already started.
    pub async fn resume(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Started => {
                debug!("resume: already started");
                Ok(())
            }
            SessionState::Paused => match self.engine.resume().await {
                Ok(()) => {
                    self.state = SessionState::Started;
                    info!("Playback resumed");
                    Ok(())
                }
                Err(err) => self.fail_stopped(err),
            },
            state => Err(SessionError::InvalidState {
                operation: "resume",
                state,
            }),
        }
    }

    /// Started or Paused -> Stopped. A no-op when already stopped.
    pub async fn stop(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Stopped => {
                debug!("stop: already stopped");
                Ok(())
            }
            SessionState::Started | SessionState::Paused => match self.engine.stop().await {
                Ok(()) => {
                    self.state = SessionState::Stopped;
                    info!("Playback stopped");
                    Ok(())
                }
                Err(err) => self.fail_stopped(err),
            },
            state => Err(SessionError::InvalidState {
                operation: "stop",
                state,
            }),
        }
    }

    /// Stopped -> Released. Releases native resources; the session is
    /// unusable afterwards. Releasing twice is a no-op.
    pub async fn clean(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Released => {
                debug!("clean: already released");
                Ok(())
            }
            SessionState::Stopped => {
                let result = self.engine.clean().await;
                // Released either way; a failed release is surfaced once and
                // never retried.
                self.state = SessionState::Released;
                info!("Session released");
                result.map_err(SessionError::Engine)
            }
            state => Err(SessionError::InvalidState {
                operation: "clean",
                state,
            }),
        }
    }

    /// Emergency release from any state. Issues native clean best-effort and
    /// marks the session terminal. Idempotent.
    pub async fn force_release(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::Released {
            return Ok(());
        }
        warn!("Force releasing session from {:?}", self.state);
        let result = self.engine.clean().await;
        self.state = SessionState::Released;
        result.map_err(SessionError::Engine)
    }

    // ------------------------------------------------------------------------
    // Progress republishing
    // ------------------------------------------------------------------------

    /// Drain the engine's push channel into the watch publisher. The task
    /// ends when the engine drops its sender during `clean`.
    fn spawn_forwarder(&self, mut updates: mpsc::Receiver<EngineUpdate>) {
        let publisher = self.progress_tx.clone();
        tokio::spawn(async move {
            while let Some(update) = updates.recv().await {
                let Some(engine_state) = SessionState::from_code(update.state_code) else {
                    warn!("Dropping engine update with unknown state code {}", update.state_code);
                    continue;
                };
                publisher.send_replace(PlaybackProgress {
                    duration_ms: update.duration_ms,
                    position_ms: update.position_ms,
                    engine_state,
                });
            }
            debug!("Engine update channel closed");
        });
    }

    /// Defensive transition after a failed native call: the pipeline is
    /// assumed halted and the failure is surfaced, never retried.
    fn fail_stopped(&mut self, err: EngineError) -> Result<(), SessionError> {
        warn!("Native engine call failed: {}", err);
        self.state = SessionState::Stopped;
        Err(SessionError::Engine(err))
    }
}
