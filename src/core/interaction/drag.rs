use crate::core::data::screen_point::ScreenPoint;
use crate::core::interaction::events::InputEvent;
use crate::core::interaction::settings::InteractionSettings;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last: ScreenPoint,
    },
}

impl DragState {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragEffect {
    #[default]
    None,
    Started,
    Ended,
    /// Pan by a screen delta, sensitivity already applied.
    Pan {
        dx: f64,
        dy: f64,
    },
}

/// Advances the drag sub-machine by one event.
///
/// Press/release/leave with a non-primary button leave the state untouched.
/// Events that do not concern dragging (wheel, resize) return the state
/// unchanged with no effect.
#[must_use]
pub fn step_drag(
    state: DragState,
    event: &InputEvent,
    settings: &InteractionSettings,
) -> (DragState, DragEffect) {
    match (state, event) {
        (_, InputEvent::PointerDown { button, .. }
            | InputEvent::PointerUp { button, .. }
            | InputEvent::PointerLeave { button, .. })
            if !button.is_primary() =>
        {
            (state, DragEffect::None)
        }

        (_, InputEvent::PointerDown { position, .. }) => {
            if !position.is_finite() {
                return (state, DragEffect::None);
            }

            // A press while dragging only re-anchors; the release may have
            // happened over an overlay and never reached us.
            let effect = if state.is_active() {
                DragEffect::None
            } else {
                DragEffect::Started
            };

            (DragState::Dragging { last: *position }, effect)
        }

        (DragState::Dragging { .. }, InputEvent::PointerUp { .. }) => {
            (DragState::Idle, DragEffect::Ended)
        }

        (DragState::Dragging { .. }, InputEvent::PointerLeave { related_target, .. }) => {
            if settings.is_overlay_target(related_target.as_deref()) {
                (state, DragEffect::None)
            } else {
                (DragState::Idle, DragEffect::Ended)
            }
        }

        (DragState::Dragging { last }, InputEvent::PointerMove { position }) => {
            if !position.is_finite() {
                return (state, DragEffect::None);
            }

            let sensitivity = settings.drag_sensitivity;
            let dx = (last.x - position.x) * sensitivity;
            let dy = (position.y - last.y) * sensitivity;

            (
                DragState::Dragging { last: *position },
                DragEffect::Pan { dx, dy },
            )
        }

        _ => (state, DragEffect::None),
    }
}
