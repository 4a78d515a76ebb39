//! winit window events to `InputEvent`s.

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::core::data::screen_point::ScreenPoint;
use crate::core::interaction::{InputEvent, PointerButton};

/// Pixels per scroll line, matching the usual browser `deltaY` for one notch.
const LINE_DELTA_PIXELS: f64 = 100.0;

#[must_use]
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(code) => PointerButton::Other(code),
    }
}

/// Vertical scroll with positive values meaning "towards the user".
///
/// winit reports scrolling away from the user as positive, so both variants
/// are negated.
#[must_use]
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(y) * LINE_DELTA_PIXELS,
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}

/// Remembers where the cursor is, since winit only reports positions on
/// `CursorMoved`, and whether it is currently over an overlay.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: ScreenPoint,
    overlay: Option<&'static str>,
}

impl PointerTracker {
    #[must_use]
    pub fn position(&self) -> ScreenPoint {
        self.position
    }

    /// `consumed` is true when the overlay already handled the event.
    /// `overlay_at` names the overlay under a position, if any.
    pub fn translate<F>(&mut self, event: &WindowEvent, consumed: bool, overlay_at: F) -> Option<InputEvent>
    where
        F: FnOnce(ScreenPoint) -> Option<&'static str>,
    {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = ScreenPoint::new(position.x, position.y);

                match (self.overlay, overlay_at(self.position)) {
                    (None, Some(target)) => {
                        self.overlay = Some(target);
                        Some(InputEvent::PointerLeave {
                            button: PointerButton::Primary,
                            related_target: Some(target.to_owned()),
                        })
                    }
                    (_, Some(target)) => {
                        self.overlay = Some(target);
                        None
                    }
                    (_, None) => {
                        self.overlay = None;
                        Some(InputEvent::PointerMove {
                            position: self.position,
                        })
                    }
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.overlay = None;
                Some(InputEvent::PointerLeave {
                    button: PointerButton::Primary,
                    related_target: None,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button);
                let position = self.position;

                match state {
                    ElementState::Pressed if consumed => None,
                    ElementState::Pressed => Some(InputEvent::PointerDown { button, position }),
                    ElementState::Released => Some(InputEvent::PointerUp { button, position }),
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed => Some(InputEvent::Wheel {
                delta_y: wheel_delta_y(*delta),
                position: self.position,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::{DeviceId, TouchPhase};

    fn device_id() -> DeviceId {
        // SAFETY: only used as an opaque value in synthetic events.
        unsafe { DeviceId::dummy() }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device_id(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn mouse_input(state: ElementState, button: MouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device_id(),
            state,
            button,
        }
    }

    fn no_overlay(_: ScreenPoint) -> Option<&'static str> {
        None
    }

    #[test]
    fn maps_buttons() {
        assert_eq!(pointer_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(pointer_button(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(pointer_button(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(pointer_button(MouseButton::Other(9)), PointerButton::Other(9));
    }

    #[test]
    fn scrolling_away_is_negative() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 1.0)), -100.0);
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -2.0)), 200.0);
        assert_eq!(
            wheel_delta_y(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 30.0))),
            -30.0
        );
    }

    #[test]
    fn press_uses_last_cursor_position() {
        let mut tracker = PointerTracker::default();

        tracker.translate(&cursor_moved(400.0, 300.0), false, no_overlay);
        let event = tracker.translate(&mouse_input(ElementState::Pressed, MouseButton::Left), false, no_overlay);

        assert_eq!(event, Some(InputEvent::press(400.0, 300.0)));
    }

    #[test]
    fn consumed_press_is_dropped_but_release_is_kept() {
        let mut tracker = PointerTracker::default();

        let press = tracker.translate(&mouse_input(ElementState::Pressed, MouseButton::Left), true, no_overlay);
        let release = tracker.translate(&mouse_input(ElementState::Released, MouseButton::Left), true, no_overlay);

        assert_eq!(press, None);
        assert_eq!(release, Some(InputEvent::release(0.0, 0.0)));
    }

    #[test]
    fn entering_overlay_emits_single_leave_with_target() {
        let mut tracker = PointerTracker::default();
        let over_panel = |_: ScreenPoint| Some("control_panel");

        let first = tracker.translate(&cursor_moved(5.0, 5.0), false, over_panel);
        let second = tracker.translate(&cursor_moved(6.0, 6.0), false, over_panel);
        let back = tracker.translate(&cursor_moved(500.0, 500.0), false, no_overlay);

        assert_eq!(first, Some(InputEvent::leave(Some("control_panel"))));
        assert_eq!(second, None);
        assert_eq!(back, Some(InputEvent::move_to(500.0, 500.0)));
    }

    #[test]
    fn cursor_left_is_leave_without_target() {
        let mut tracker = PointerTracker::default();

        let event = tracker.translate(&WindowEvent::CursorLeft { device_id: device_id() }, false, no_overlay);

        assert_eq!(event, Some(InputEvent::leave(None)));
    }

    #[test]
    fn wheel_carries_position_unless_consumed() {
        let mut tracker = PointerTracker::default();
        tracker.translate(&cursor_moved(10.0, 20.0), false, no_overlay);
        let wheel = WindowEvent::MouseWheel {
            device_id: device_id(),
            delta: MouseScrollDelta::LineDelta(0.0, 1.0),
            phase: TouchPhase::Moved,
        };

        assert_eq!(
            tracker.translate(&wheel, false, no_overlay),
            Some(InputEvent::wheel(-100.0, 10.0, 20.0))
        );
        assert_eq!(tracker.translate(&wheel, true, no_overlay), None);
    }
}
