use std::time::Instant;

use tracing::info;

use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::ports::render_engine::RenderEnginePort;
use crate::core::data::viewport_extent::ViewportExtent;
use crate::core::viewport::ViewState;
use crate::presenters::checkerboard::draw_checkerboard;

/// Off-screen render engine: draws the preview into an in-memory RGBA frame
/// and logs each frame. Used by the headless binary and in tests.
pub struct HeadlessRenderEngine {
    extent: ViewportExtent,
    frame: Vec<u8>,
    frames_rendered: u64,
}

impl HeadlessRenderEngine {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut engine = Self {
            extent: ViewportExtent::default(),
            frame: Vec::new(),
            frames_rendered: 0,
        };
        engine.set_surface_size(width, height);
        engine
    }

    /// Simulates the host surface changing size. The controller picks it up
    /// on the next `notify_resize`.
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.extent = ViewportExtent::new(width, height);
        self.frame = vec![0; width as usize * height as usize * 4];
    }

    #[must_use]
    pub fn extent(&self) -> ViewportExtent {
        self.extent
    }

    /// RGBA bytes of the last rendered frame.
    #[must_use]
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl RenderEnginePort for HeadlessRenderEngine {
    fn render_frame(&mut self, view: &ViewState) -> Result<(), RenderError> {
        if view.extent != self.extent {
            return Err(RenderError::Present(format!(
                "view extent {}x{} does not match surface {}x{}",
                view.extent.width, view.extent.height, self.extent.width, self.extent.height
            )));
        }

        let start = Instant::now();
        draw_checkerboard(&mut self.frame, view)?;
        self.frames_rendered += 1;

        info!(
            frame = self.frames_rendered,
            real = view.center.real,
            imag = view.center.imag,
            zoom = view.zoom,
            elapsed_us = start.elapsed().as_micros() as u64,
            "frame rendered"
        );

        Ok(())
    }

    fn notify_resize(&mut self) -> Result<ViewportExtent, RenderError> {
        if self.extent.is_degenerate() {
            return Err(RenderError::SurfaceUnavailable);
        }

        Ok(self.extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;
    use crate::controllers::interactive::ExplorerController;
    use crate::core::interaction::InputEvent;

    #[test]
    fn renders_through_controller() {
        let mut controller =
            ExplorerController::new(&ExplorerConfig::default(), HeadlessRenderEngine::new(64, 48));
        controller.start();
        controller.dispatch(&InputEvent::wheel(-1.0, 10.0, 10.0));

        assert_eq!(controller.engine().frames_rendered(), 2);
        assert!(controller.engine().frame().chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn surface_change_is_picked_up_on_resize_event() {
        let mut controller =
            ExplorerController::new(&ExplorerConfig::default(), HeadlessRenderEngine::new(64, 48));
        controller.start();

        controller.engine_mut().set_surface_size(32, 32);
        controller.dispatch(&InputEvent::WindowResized);

        assert_eq!(controller.viewport().extent(), ViewportExtent::new(32, 32));
        assert_eq!(controller.engine().frame().len(), 32 * 32 * 4);
        assert_eq!(controller.engine().frames_rendered(), 2);
    }

    #[test]
    fn stale_extent_is_reported_not_drawn() {
        let mut engine = HeadlessRenderEngine::new(8, 8);
        let view = ViewState {
            center: crate::core::data::complex::Complex::new(0.0, 0.0),
            zoom: 1.0,
            extent: ViewportExtent::new(4, 4),
        };

        assert!(engine.render_frame(&view).is_err());
        assert_eq!(engine.frames_rendered(), 0);
    }

    #[test]
    fn zero_sized_surface_is_unavailable() {
        let mut engine = HeadlessRenderEngine::new(0, 10);

        assert_eq!(engine.notify_resize(), Err(RenderError::SurfaceUnavailable));
    }
}
