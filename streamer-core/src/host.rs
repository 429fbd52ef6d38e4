use crate::errors::SessionError;
use crate::session::StreamingSession;
use crate::types::SessionState;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

// ============================================================================
// Session Host
// ============================================================================

/// Sequences session transitions from UI lifecycle events.
///
/// The host owns the session-control domain: it launches the initial
/// `create` + `start` sequence asynchronously, forwards visibility changes to
/// `pause`/`resume`, and eventually releases the native resources. Lifecycle
/// callbacks are never allowed to run concurrently with the still-pending
/// launch; they first await it, so `pause` issued right after `launch`
/// observes `Started`. This is enforced by sequencing, not by a lock.
pub struct SessionHost {
    session: Arc<Mutex<StreamingSession>>,
    launch: Option<JoinHandle<Result<(), SessionError>>>,
}

impl SessionHost {
    pub fn new(session: StreamingSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            launch: None,
        }
    }

    /// Shared handle to the session, e.g. for progress subscriptions.
    pub fn session(&self) -> Arc<Mutex<StreamingSession>> {
        Arc::clone(&self.session)
    }

    /// Kick off the `create` + `start` sequence on its own task.
    ///
    /// The spawn is the commit point: dropping any future that awaits the
    /// launch leaves the sequence running and its result discarded. A second
    /// launch is ignored.
    pub fn launch(&mut self) {
        if self.launch.is_some() {
            warn!("launch already issued");
            return;
        }
        let session = Arc::clone(&self.session);
        self.launch = Some(tokio::spawn(async move {
            let mut session = session.lock().await;
            session.create().await?;
            session.start().await
        }));
    }

    /// Await the pending launch, surfacing its result once.
    pub async fn wait_ready(&mut self) -> Result<(), SessionError> {
        self.join_launch().await
    }

    /// UI no longer visible.
    pub async fn on_pause(&mut self) -> Result<(), SessionError> {
        self.join_launch().await?;
        let mut session = self.session.lock().await;
        if session.state().is_released() {
            debug!("on_pause: session already released");
            return Ok(());
        }
        session.pause().await
    }

    /// UI visible again.
    pub async fn on_resume(&mut self) -> Result<(), SessionError> {
        self.join_launch().await?;
        let mut session = self.session.lock().await;
        if session.state().is_released() {
            debug!("on_resume: session already released");
            return Ok(());
        }
        session.resume().await
    }

    /// Stop the pipeline and release native resources.
    ///
    /// Skipping this leaks native resources; there is no runtime recovery.
    pub async fn shutdown(&mut self) -> Result<(), SessionError> {
        if let Err(err) = self.join_launch().await {
            warn!("Discarding failed launch during shutdown: {}", err);
        }
        let mut session = self.session.lock().await;
        match session.state() {
            SessionState::Started | SessionState::Paused => {
                session.stop().await?;
                session.clean().await
            }
            SessionState::Stopped => session.clean().await,
            SessionState::Released => Ok(()),
            SessionState::Ready | SessionState::Uninitialized => session.force_release().await,
        }
    }

    async fn join_launch(&mut self) -> Result<(), SessionError> {
        match self.launch.take() {
            None => Ok(()),
            Some(handle) => match handle.await {
                Ok(result) => result,
                Err(err) => Err(SessionError::Launch {
                    reason: err.to_string(),
                }),
            },
        }
    }
}
