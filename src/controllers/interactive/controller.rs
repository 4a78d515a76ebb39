use tracing::{debug, info, warn};

use crate::config::ExplorerConfig;
use crate::controllers::interactive::ports::render_engine::RenderEnginePort;
use crate::core::data::complex::Complex;
use crate::core::interaction::{Effect, InputEvent, InteractionController, Response};
use crate::core::viewport::{ViewState, Viewport};

/// Owns the viewport and routes every input event through the interaction
/// state machines, firing the render engine after each viewport change.
///
/// Render and resize failures are logged and dropped: the viewport transform
/// is always applied before the engine is called.
pub struct ExplorerController<R: RenderEnginePort> {
    viewport: Viewport,
    interaction: InteractionController,
    engine: R,
    frames_requested: u64,
}

impl<R: RenderEnginePort> ExplorerController<R> {
    pub fn new(config: &ExplorerConfig, engine: R) -> Self {
        Self {
            viewport: config.build_viewport(),
            interaction: InteractionController::new(config.interaction.clone()),
            engine,
            frames_requested: 0,
        }
    }

    /// Measures the surface and draws the first frame.
    pub fn start(&mut self) {
        self.refresh_extent();
        info!(
            center = ?self.viewport.center(),
            zoom = self.viewport.current_zoom(),
            "explorer started"
        );
        self.render();
    }

    pub fn dispatch(&mut self, event: &InputEvent) -> Response {
        let response = self.interaction.handle(event, &mut self.viewport);

        match response.effect {
            Effect::ResizeRequested => {
                self.refresh_extent();
                self.render();
            }
            effect if effect.changes_view() => self.render(),
            _ => {}
        }

        response
    }

    pub fn pan(&mut self, dx_screen: f64, dy_screen: f64) -> ViewState {
        self.viewport.pan(dx_screen, dy_screen);
        self.render();
        self.viewport.state()
    }

    pub fn zoom_by(&mut self, step: f64, anchor_nx: f64, anchor_ny: f64) -> ViewState {
        self.viewport.zoom_by(step, anchor_nx, anchor_ny);
        self.render();
        self.viewport.state()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> ViewState {
        self.viewport.resize(width, height);
        self.render();
        self.viewport.state()
    }

    pub fn set_center(&mut self, center: Complex) -> ViewState {
        self.viewport.set_center(center);
        self.render();
        self.viewport.state()
    }

    pub fn set_zoom(&mut self, zoom: f64) -> ViewState {
        self.viewport.set_zoom(zoom);
        self.render();
        self.viewport.state()
    }

    pub fn reset(&mut self) -> ViewState {
        self.viewport.reset();
        debug!("viewport reset");
        self.render();
        self.viewport.state()
    }

    #[must_use]
    pub fn current_zoom(&self) -> f64 {
        self.viewport.current_zoom()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    /// Abandons an in-progress drag without moving the viewport.
    pub fn cancel_drag(&mut self) {
        self.interaction.cancel_drag();
    }

    #[must_use]
    pub fn engine(&self) -> &R {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut R {
        &mut self.engine
    }

    #[must_use]
    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    fn refresh_extent(&mut self) {
        match self.engine.notify_resize() {
            Ok(extent) => {
                self.viewport.resize(extent.width, extent.height);
                info!(width = extent.width, height = extent.height, "surface resized");
            }
            Err(err) => warn!(error = %err, "resize hook failed; keeping previous extent"),
        }
    }

    fn render(&mut self) {
        self.frames_requested += 1;

        if let Err(err) = self.engine.render_frame(&self.viewport.state()) {
            warn!(error = %err, frame = self.frames_requested, "render failed; frame dropped");
        }
    }
}
