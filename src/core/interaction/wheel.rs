use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport_extent::ViewportExtent;

/// Zoom request derived from a single wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelZoom {
    pub step: f64,
    pub anchor_nx: f64,
    pub anchor_ny: f64,
}

/// Converts a wheel event into a zoom step anchored at the pointer.
///
/// The step is a fixed fraction of the current zoom, which makes repeated
/// notches feel exponential. Scrolling away from the user (`delta_y < 0`)
/// shrinks the zoom, i.e. magnifies. A zero or non-finite delta yields
/// `None`.
#[must_use]
pub fn wheel_zoom(
    current_zoom: f64,
    delta_y: f64,
    position: ScreenPoint,
    extent: ViewportExtent,
    step_divisor: f64,
) -> Option<WheelZoom> {
    if delta_y == 0.0 || !delta_y.is_finite() || !position.is_finite() {
        return None;
    }

    let divisor = if step_divisor.is_finite() && step_divisor > 0.0 {
        step_divisor
    } else {
        super::settings::DEFAULT_WHEEL_STEP_DIVISOR
    };

    let magnitude = current_zoom / divisor;
    let step = if delta_y < 0.0 { -magnitude } else { magnitude };
    let (anchor_nx, anchor_ny) = extent.normalize(position);

    Some(WheelZoom {
        step,
        anchor_nx,
        anchor_ny,
    })
}
