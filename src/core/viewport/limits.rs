use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_ZOOM: f64 = 1e-6;
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;
/// Plane span of the short screen axis, in zoom units.
pub const DEFAULT_PLANE_SPAN: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub plane_span: f64,
}

impl ViewportLimits {
    /// Clamps into `[min_zoom, max_zoom]`. `min_zoom` is always positive, so
    /// the result never reaches zero.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        let min_zoom = self.effective_min_zoom();
        let max_zoom = self.max_zoom.max(min_zoom);

        if zoom.is_nan() {
            return min_zoom;
        }

        zoom.clamp(min_zoom, max_zoom)
    }

    fn effective_min_zoom(&self) -> f64 {
        if self.min_zoom.is_finite() && self.min_zoom > 0.0 {
            self.min_zoom
        } else {
            DEFAULT_MIN_ZOOM
        }
    }
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            plane_span: DEFAULT_PLANE_SPAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = ViewportLimits::default();

        assert!(limits.min_zoom > 0.0);
        assert!(limits.max_zoom > limits.min_zoom);
        assert!(limits.plane_span.is_finite() && limits.plane_span > 0.0);
    }

    #[test]
    fn clamp_zoom_keeps_values_in_range() {
        let limits = ViewportLimits::default();

        assert_eq!(limits.clamp_zoom(0.5), 0.5);
        assert_eq!(limits.clamp_zoom(0.0), DEFAULT_MIN_ZOOM);
        assert_eq!(limits.clamp_zoom(-3.0), DEFAULT_MIN_ZOOM);
        assert_eq!(limits.clamp_zoom(99.0), DEFAULT_MAX_ZOOM);
        assert_eq!(limits.clamp_zoom(f64::NAN), DEFAULT_MIN_ZOOM);
    }

    #[test]
    fn non_positive_min_zoom_falls_back_to_default_floor() {
        let limits = ViewportLimits {
            min_zoom: 0.0,
            ..ViewportLimits::default()
        };

        assert_eq!(limits.clamp_zoom(-1.0), DEFAULT_MIN_ZOOM);
    }
}
