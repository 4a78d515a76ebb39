use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{debug, error};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::Window,
};

use crate::controllers::interactive::ExplorerController;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::interaction::settings::{CONTROL_PANEL_TARGET, SHOW_BUTTON_TARGET};
use crate::core::interaction::{CursorHint, Effect, InputEvent};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::translate::PointerTracker;

const OVERLAY_TARGETS: [&str; 2] = [CONTROL_PANEL_TARGET, SHOW_BUTTON_TARGET];

pub struct GuiApp<P: GuiPresenterPort> {
    window: &'static Window,
    controller: ExplorerController<P>,
    pointer: PointerTracker,
    cursor: CursorHint,
    panel_open: bool,
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(window: &'static Window, event_loop: &EventLoop<()>, controller: ExplorerController<P>) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            controller,
            pointer: PointerTracker::default(),
            cursor: CursorHint::Default,
            panel_open: true,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window is closed or presenting fails.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let mut failure: Option<GuiError> = None;

        self.controller.start();

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                if let Err(err) = self.handle_window_event(event, elwt) {
                    error!(error = %err, "presenting failed");
                    failure = Some(err);
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                if self.redraw_pending {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })?;

        failure.map_or(Ok(()), Err)
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<()>) -> Result<(), GuiError> {
        // Forward event to egui first
        let egui_response = self.egui_state.on_window_event(self.window, event);
        if egui_response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::Resized(_) => self.dispatch(&InputEvent::WindowResized),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                self.dispatch(&InputEvent::WindowResized);
            }
            WindowEvent::Focused(false) => {
                self.controller.cancel_drag();
                self.cursor = CursorHint::Default;
            }
            _ => {
                let egui_ctx = &self.egui_ctx;
                let input = self
                    .pointer
                    .translate(event, egui_response.consumed, |position| overlay_target_at(egui_ctx, position));

                if let Some(input) = input {
                    self.dispatch(&input);
                }
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, input: &InputEvent) {
        let response = self.controller.dispatch(input);

        if response.cursor != self.cursor {
            debug!(cursor = ?response.cursor, "cursor changed");
            self.cursor = response.cursor;
            self.redraw_pending = true;
        }
        if response.effect != Effect::Ignored {
            self.redraw_pending = true;
        }
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        self.redraw_pending = false;

        let mut egui_output = self.update_ui();

        if self.cursor == CursorHint::Move {
            egui_output.platform_output.cursor_icon = egui::CursorIcon::Move;
        }

        // Handle egui platform output (e.g., clipboard, cursor changes)
        self.egui_state
            .handle_platform_output(self.window, std::mem::take(&mut egui_output.platform_output));

        if egui_output.viewport_output.values().any(|v| v.repaint_delay.is_zero()) {
            self.redraw_pending = true;
        }

        self.controller.engine_mut().present(egui_output, &self.egui_ctx)?;

        Ok(())
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let view = self.controller.viewport().state();
        let frames = self.controller.frames_requested();
        let dragging = self.controller.interaction().is_dragging();
        let mut panel_open = self.panel_open;
        let mut reset_requested = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Viewport")
                .id(egui::Id::new(CONTROL_PANEL_TARGET))
                .open(&mut panel_open)
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot Explorer");
                    ui.separator();

                    ui.label(format!("Center: {:.8} {:+.8}i", view.center.real, view.center.imag));
                    ui.label(format!("Zoom: {:.3e}", view.zoom));
                    ui.label(format!("Surface: {}x{}", view.extent.width, view.extent.height));
                    ui.label(format!("Frames: {frames}"));
                    if dragging {
                        ui.label("Dragging");
                    }

                    if ui.button("Reset view").clicked() {
                        reset_requested = true;
                    }
                });

            if !panel_open {
                egui::Area::new(egui::Id::new(SHOW_BUTTON_TARGET))
                    .fixed_pos([10.0, 10.0])
                    .show(ctx, |ui| {
                        if ui.button("Show controls").clicked() {
                            panel_open = true;
                        }
                    });
            }
        });

        self.panel_open = panel_open;

        if reset_requested {
            self.controller.reset();
            self.redraw_pending = true;
        }

        output
    }
}

/// Names the overlay element under a physical-pixel position.
fn overlay_target_at(egui_ctx: &Context, position: ScreenPoint) -> Option<&'static str> {
    let pixels_per_point = f64::from(egui_ctx.pixels_per_point());
    let pos = egui::pos2(
        (position.x / pixels_per_point) as f32,
        (position.y / pixels_per_point) as f32,
    );
    let layer = egui_ctx.layer_id_at(pos)?;

    OVERLAY_TARGETS
        .into_iter()
        .find(|target| layer.id == egui::Id::new(*target))
}
