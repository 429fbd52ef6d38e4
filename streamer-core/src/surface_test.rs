#[cfg(test)]
mod tests {
    use crate::engine::RenderEngine;
    use crate::errors::{EngineError, SurfaceError};
    use crate::surface::RenderSurfaceController;
    use crate::types::SurfaceConfig;
    use std::sync::{Arc, Mutex};

    struct RecordingRenderer {
        events: Arc<Mutex<Vec<String>>>,
        fail_init: bool,
    }

    impl RenderEngine for RecordingRenderer {
        fn init(&mut self) -> Result<(), EngineError> {
            if self.fail_init {
                return Err(EngineError::Failed {
                    reason: "no GL context".to_string(),
                });
            }
            self.events.lock().unwrap().push("init".to_string());
            Ok(())
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.events
                .lock()
                .unwrap()
                .push(format!("resize {}x{}", width, height));
        }

        fn draw(&mut self) {
            self.events.lock().unwrap().push("draw".to_string());
        }
    }

    fn controller(fail_init: bool) -> (RenderSurfaceController, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let renderer = RecordingRenderer {
            events: Arc::clone(&events),
            fail_init,
        };
        (
            RenderSurfaceController::new(SurfaceConfig::default(), Box::new(renderer)),
            events,
        )
    }

    #[test]
    fn test_default_surface_config() {
        let config = SurfaceConfig::default();
        assert_eq!(
            (config.red_bits, config.green_bits, config.blue_bits),
            (8, 8, 8)
        );
        assert_eq!(config.alpha_bits, 0);
        assert_eq!(config.depth_bits, 16);
        assert_eq!(config.stencil_bits, 0);
        assert_eq!(config.gles_version, 3);
    }

    #[test]
    fn test_draw_before_create_is_rejected() {
        let (mut controller, events) = controller(false);

        let err = controller.on_draw_frame().unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::NotInitialized {
                operation: "on_draw_frame"
            }
        ));
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_resize_before_create_is_rejected() {
        let (mut controller, events) = controller(false);

        let err = controller.on_surface_changed(640, 480).unwrap_err();
        assert!(matches!(err, SurfaceError::NotInitialized { .. }));
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_create_resize_draw_order() {
        let (mut controller, events) = controller(false);

        controller.on_surface_created().unwrap();
        controller.on_surface_changed(640, 480).unwrap();
        controller.on_draw_frame().unwrap();
        controller.on_draw_frame().unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec!["init", "resize 640x480", "draw", "draw"]
        );
        assert_eq!(controller.viewport(), Some((640, 480)));
    }

    #[test]
    fn test_surface_recreation_reinitializes() {
        let (mut controller, events) = controller(false);

        controller.on_surface_created().unwrap();
        controller.on_surface_changed(640, 480).unwrap();

        // Surface destroyed and recreated, e.g. after a configuration change.
        controller.on_surface_created().unwrap();
        assert_eq!(controller.viewport(), None);

        let inits = events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| *e == "init")
            .count();
        assert_eq!(inits, 2);
    }

    #[test]
    fn test_failed_init_keeps_surface_unusable() {
        let (mut controller, _events) = controller(true);

        let err = controller.on_surface_created().unwrap_err();
        assert!(matches!(err, SurfaceError::Engine(_)));

        let err = controller.on_draw_frame().unwrap_err();
        assert!(matches!(err, SurfaceError::NotInitialized { .. }));
    }
}
