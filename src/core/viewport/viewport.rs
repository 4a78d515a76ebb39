use crate::core::data::complex::Complex;
use crate::core::data::viewport_extent::ViewportExtent;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::view_state::ViewState;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;

/// The visible window into the fractal plane.
///
/// Holds the center, the zoom scale and the surface extent used to normalize
/// screen deltas. All operations are total: non-finite input leaves the
/// viewport untouched and zoom is clamped into the configured limits, so
/// `zoom > 0` holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    zoom: f64,
    extent: ViewportExtent,
    limits: ViewportLimits,
    home_center: Complex,
    home_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM, ViewportLimits::default())
    }
}

impl Viewport {
    #[must_use]
    pub fn new(center: Complex, zoom: f64, limits: ViewportLimits) -> Self {
        let center = if center.is_finite() { center } else { DEFAULT_CENTER };
        let zoom = limits.clamp_zoom(zoom);

        Self {
            center,
            zoom,
            extent: ViewportExtent::default(),
            limits,
            home_center: center,
            home_zoom: zoom,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.extent = ViewportExtent::new(width, height);
    }

    /// Moves the center by a screen-space delta.
    ///
    /// One pixel along the short axis covers `plane_span * zoom / short_side`
    /// plane units, so the same drag distance gives the same visual movement
    /// regardless of window shape or magnification. Callers pass inverted
    /// x deltas (`last - current`) and screen-down y deltas, which makes the
    /// content follow the pointer.
    pub fn pan(&mut self, dx_screen: f64, dy_screen: f64) -> ViewState {
        if !dx_screen.is_finite() || !dy_screen.is_finite() {
            return self.state();
        }

        let units_per_pixel = self.limits.plane_span * self.zoom / self.extent.short_side();
        let moved = self.center + Complex::new(dx_screen, dy_screen) * units_per_pixel;

        if moved.is_finite() {
            self.center = moved;
        }

        self.state()
    }

    /// Adds `step` to the zoom while keeping the plane point under the anchor
    /// fixed on screen. The anchor is given in normalized device coordinates.
    pub fn zoom_by(&mut self, step: f64, anchor_nx: f64, anchor_ny: f64) -> ViewState {
        if !step.is_finite() || !anchor_nx.is_finite() || !anchor_ny.is_finite() {
            return self.state();
        }

        let anchor = self.state().plane_point_at(anchor_nx, anchor_ny);
        let new_zoom = self.limits.clamp_zoom(self.zoom + step);
        let (scale_x, scale_y) = self.extent.aspect_scale();

        self.zoom = new_zoom;
        self.center = Complex {
            real: anchor.real - anchor_nx * scale_x * new_zoom,
            imag: anchor.imag - anchor_ny * scale_y * new_zoom,
        };

        self.state()
    }

    #[must_use]
    pub fn current_zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn extent(&self) -> ViewportExtent {
        self.extent
    }

    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    pub fn set_center(&mut self, center: Complex) -> ViewState {
        if center.is_finite() {
            self.center = center;
        }

        self.state()
    }

    pub fn set_zoom(&mut self, zoom: f64) -> ViewState {
        if zoom.is_finite() {
            self.zoom = self.limits.clamp_zoom(zoom);
        }

        self.state()
    }

    /// Restores the center and zoom the viewport was created with.
    pub fn reset(&mut self) -> ViewState {
        self.center = self.home_center;
        self.zoom = self.home_zoom;
        self.state()
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        ViewState {
            center: self.center,
            zoom: self.zoom,
            extent: self.extent,
        }
    }
}
