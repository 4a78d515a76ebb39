use tracing::debug;

use crate::core::data::screen_point::ScreenPoint;
use crate::core::interaction::drag::{DragEffect, DragState, step_drag};
use crate::core::interaction::events::InputEvent;
use crate::core::interaction::settings::InteractionSettings;
use crate::core::interaction::wheel::{WheelZoom, wheel_zoom};
use crate::core::viewport::{ViewState, Viewport};

/// Pointer cursor the host should display after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Ignored,
    DragStarted,
    DragEnded,
    Panned { dx: f64, dy: f64, view: ViewState },
    Zoomed { zoom: WheelZoom, view: ViewState },
    /// The host surface changed size; the render engine must re-derive it.
    ResizeRequested,
}

impl Effect {
    #[must_use]
    pub const fn changes_view(&self) -> bool {
        matches!(self, Self::Panned { .. } | Self::Zoomed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    pub effect: Effect,
    /// The host must suppress its default action (page scroll) for this event.
    pub prevent_default: bool,
    pub cursor: CursorHint,
}

/// State machine between raw input and the viewport.
///
/// Owns only the drag state; the viewport is borrowed per event so the same
/// controller can be driven headless in tests.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    drag: DragState,
    settings: InteractionSettings,
}

impl InteractionController {
    #[must_use]
    pub fn new(settings: InteractionSettings) -> Self {
        Self {
            drag: DragState::Idle,
            settings,
        }
    }

    pub fn handle(&mut self, event: &InputEvent, viewport: &mut Viewport) -> Response {
        let (effect, prevent_default) = match event {
            InputEvent::Wheel { delta_y, position } => {
                (self.handle_wheel(*delta_y, *position, viewport), true)
            }
            InputEvent::WindowResized => (Effect::ResizeRequested, false),
            _ => (self.handle_drag(event, viewport), false),
        };

        Response {
            effect,
            prevent_default,
            cursor: self.cursor(),
        }
    }

    fn handle_drag(&mut self, event: &InputEvent, viewport: &mut Viewport) -> Effect {
        let (next, drag_effect) = step_drag(self.drag, event, &self.settings);
        self.drag = next;

        match drag_effect {
            DragEffect::None => Effect::Ignored,
            DragEffect::Started => {
                debug!(?next, "drag started");
                Effect::DragStarted
            }
            DragEffect::Ended => {
                debug!("drag ended");
                Effect::DragEnded
            }
            DragEffect::Pan { dx, dy } => {
                let view = viewport.pan(dx, dy);
                debug!(dx, dy, center = ?view.center, "panned");
                Effect::Panned { dx, dy, view }
            }
        }
    }

    fn handle_wheel(&self, delta_y: f64, position: ScreenPoint, viewport: &mut Viewport) -> Effect {
        let Some(zoom) = wheel_zoom(
            viewport.current_zoom(),
            delta_y,
            position,
            viewport.extent(),
            self.settings.wheel_step_divisor,
        ) else {
            return Effect::Ignored;
        };

        let view = viewport.zoom_by(zoom.step, zoom.anchor_nx, zoom.anchor_ny);
        debug!(step = zoom.step, zoom = view.zoom, center = ?view.center, "zoomed");

        Effect::Zoomed { zoom, view }
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    #[must_use]
    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    /// Drops any gesture in progress, e.g. when the window loses focus.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    fn cursor(&self) -> CursorHint {
        if self.drag.is_active() {
            CursorHint::Move
        } else {
            CursorHint::Default
        }
    }
}
