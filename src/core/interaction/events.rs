//! Input messages dispatched to the interaction controller.
//!
//! Hosts translate their native events (winit, a browser, a test script)
//! into these values. Positions are in device pixels relative to the
//! drawing surface.

use crate::core::data::screen_point::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

impl PointerButton {
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        button: PointerButton,
        position: ScreenPoint,
    },
    PointerUp {
        button: PointerButton,
        position: ScreenPoint,
    },
    PointerMove {
        position: ScreenPoint,
    },
    /// The pointer left the canvas. `related_target` names the element it
    /// entered, if any.
    PointerLeave {
        button: PointerButton,
        related_target: Option<String>,
    },
    Wheel {
        delta_y: f64,
        position: ScreenPoint,
    },
    WindowResized,
}

impl InputEvent {
    #[must_use]
    pub fn press(x: f64, y: f64) -> Self {
        Self::PointerDown {
            button: PointerButton::Primary,
            position: ScreenPoint::new(x, y),
        }
    }

    #[must_use]
    pub fn release(x: f64, y: f64) -> Self {
        Self::PointerUp {
            button: PointerButton::Primary,
            position: ScreenPoint::new(x, y),
        }
    }

    #[must_use]
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::PointerMove {
            position: ScreenPoint::new(x, y),
        }
    }

    #[must_use]
    pub fn leave(related_target: Option<&str>) -> Self {
        Self::PointerLeave {
            button: PointerButton::Primary,
            related_target: related_target.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn wheel(delta_y: f64, x: f64, y: f64) -> Self {
        Self::Wheel {
            delta_y,
            position: ScreenPoint::new(x, y),
        }
    }
}
