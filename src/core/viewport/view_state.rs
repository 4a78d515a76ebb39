use crate::core::data::complex::Complex;
use crate::core::data::viewport_extent::ViewportExtent;

/// Immutable snapshot of the viewport handed to the render engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub center: Complex,
    pub zoom: f64,
    pub extent: ViewportExtent,
}

impl ViewState {
    /// Plane coordinate shown at normalized device coordinate `(nx, ny)`.
    ///
    /// `zoom` is the plane half-extent of the short axis; the long axis is
    /// stretched by the aspect ratio.
    #[must_use]
    pub fn plane_point_at(&self, nx: f64, ny: f64) -> Complex {
        let (scale_x, scale_y) = self.extent.aspect_scale();

        Complex {
            real: self.center.real + nx * scale_x * self.zoom,
            imag: self.center.imag + ny * scale_y * self.zoom,
        }
    }
}
