use crate::core::data::screen_point::ScreenPoint;

/// Drawing-surface dimensions in device pixels.
///
/// A zero dimension means the extent is unknown (never resized, or a
/// minimised window). Every derived quantity then falls back to a 1:1
/// surface instead of dividing by zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ViewportExtent {
    pub width: u32,
    pub height: u32,
}

impl ViewportExtent {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Length of the shorter side in pixels, `1.0` when degenerate.
    #[must_use]
    pub fn short_side(&self) -> f64 {
        if self.is_degenerate() {
            1.0
        } else {
            f64::from(self.width.min(self.height))
        }
    }

    /// Per-axis multipliers that stretch normalized coordinates along the
    /// long axis, so one normalized unit covers the same plane distance on
    /// both axes.
    #[must_use]
    pub fn aspect_scale(&self) -> (f64, f64) {
        if self.is_degenerate() {
            return (1.0, 1.0);
        }

        let width = f64::from(self.width);
        let height = f64::from(self.height);

        if width >= height {
            (width / height, 1.0)
        } else {
            (1.0, height / width)
        }
    }

    /// Maps a screen position to normalized device coordinates: `(0, 0)` at
    /// the surface center, `±1` at the edges, y pointing up.
    ///
    /// Returns the center when the extent is degenerate.
    #[must_use]
    pub fn normalize(&self, point: ScreenPoint) -> (f64, f64) {
        if self.is_degenerate() {
            return (0.0, 0.0);
        }

        let half_width = f64::from(self.width) / 2.0;
        let half_height = f64::from(self.height) / 2.0;

        (
            (point.x - half_width) / half_width,
            (half_height - point.y) / half_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_side_picks_smaller_dimension() {
        assert_eq!(ViewportExtent::new(800, 600).short_side(), 600.0);
        assert_eq!(ViewportExtent::new(300, 900).short_side(), 300.0);
    }

    #[test]
    fn test_degenerate_extent_falls_back_to_unit_square() {
        let extent = ViewportExtent::default();

        assert!(extent.is_degenerate());
        assert_eq!(extent.short_side(), 1.0);
        assert_eq!(extent.aspect_scale(), (1.0, 1.0));
        assert_eq!(extent.normalize(ScreenPoint::new(10.0, 10.0)), (0.0, 0.0));
    }

    #[test]
    fn test_zero_height_is_degenerate() {
        let extent = ViewportExtent::new(640, 0);

        assert!(extent.is_degenerate());
        assert_eq!(extent.short_side(), 1.0);
    }

    #[test]
    fn test_aspect_scale_landscape_and_portrait() {
        assert_eq!(ViewportExtent::new(800, 400).aspect_scale(), (2.0, 1.0));
        assert_eq!(ViewportExtent::new(400, 800).aspect_scale(), (1.0, 2.0));
        assert_eq!(ViewportExtent::new(500, 500).aspect_scale(), (1.0, 1.0));
    }

    #[test]
    fn test_normalize_center_edges_and_y_flip() {
        let extent = ViewportExtent::new(800, 600);

        assert_eq!(extent.normalize(ScreenPoint::new(400.0, 300.0)), (0.0, 0.0));
        assert_eq!(extent.normalize(ScreenPoint::new(0.0, 0.0)), (-1.0, 1.0));
        assert_eq!(extent.normalize(ScreenPoint::new(800.0, 600.0)), (1.0, -1.0));
        assert_eq!(extent.normalize(ScreenPoint::new(600.0, 150.0)), (0.5, 0.5));
    }
}
