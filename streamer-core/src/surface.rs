use crate::engine::RenderEngine;
use crate::errors::SurfaceError;
use crate::types::SurfaceConfig;
use tracing::debug;

// ============================================================================
// Render Surface Controller
// ============================================================================

/// Owns the rendering surface's configuration and lifecycle.
///
/// Mirrors the windowing system's three-callback protocol: the platform
/// invokes `on_surface_created`, then zero or more `on_surface_changed`, then
/// `on_draw_frame` once per display refresh, all serialized on one dedicated
/// render-domain context. The controller only delegates; `on_draw_frame` must
/// stay non-blocking, so anything slow belongs elsewhere.
pub struct RenderSurfaceController {
    config: SurfaceConfig,
    renderer: Box<dyn RenderEngine>,
    surface_created: bool,
    viewport: Option<(u32, u32)>,
}

impl RenderSurfaceController {
    pub fn new(config: SurfaceConfig, renderer: Box<dyn RenderEngine>) -> Self {
        Self {
            config,
            renderer,
            surface_created: false,
            viewport: None,
        }
    }

    pub fn config(&self) -> SurfaceConfig {
        self.config
    }

    /// Drawable dimensions from the most recent `on_surface_changed`.
    pub fn viewport(&self) -> Option<(u32, u32)> {
        self.viewport
    }

    /// Surface created (or recreated after a configuration change).
    ///
    /// (Re)initializes the native rendering context; no draw call is accepted
    /// before this completes.
    pub fn on_surface_created(&mut self) -> Result<(), SurfaceError> {
        debug!("onSurfaceCreated");
        self.renderer.init()?;
        self.surface_created = true;
        self.viewport = None;
        Ok(())
    }

    /// Drawable area changed; forwards the new dimensions to the renderer.
    pub fn on_surface_changed(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if !self.surface_created {
            return Err(SurfaceError::NotInitialized {
                operation: "on_surface_changed",
            });
        }
        debug!("onSurfaceChanged: {}x{}", width, height);
        self.renderer.resize(width, height);
        self.viewport = Some((width, height));
        Ok(())
    }

    /// Frame requested by the display refresh; pulls the latest decoded frame
    /// through the renderer.
    pub fn on_draw_frame(&mut self) -> Result<(), SurfaceError> {
        if !self.surface_created {
            return Err(SurfaceError::NotInitialized {
                operation: "on_draw_frame",
            });
        }
        self.renderer.draw();
        Ok(())
    }
}
