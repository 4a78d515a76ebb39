//! Plane-space checkerboard preview.
//!
//! Tiles are fixed in the fractal plane, so panning slides them and zooming
//! scales them until the next power-of-two tile size takes over. Points inside
//! the escape radius are tinted to show where the set lives.

use rayon::prelude::*;

use crate::controllers::interactive::errors::render::RenderError;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::viewport::ViewState;

const BYTES_PER_PIXEL: usize = 4;
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

const DARK: [u8; 3] = [60, 60, 60];
const LIGHT: [u8; 3] = [200, 200, 200];
const DARK_INSIDE: [u8; 3] = [40, 40, 90];
const LIGHT_INSIDE: [u8; 3] = [170, 170, 230];

/// Plane edge length of one tile: a power of two, roughly an eighth of the
/// visible short-axis span.
#[must_use]
pub fn tile_size(zoom: f64) -> f64 {
    (zoom.log2().floor() - 2.0).exp2()
}

/// Fills an RGBA frame sized to `view.extent`, one rayon task per row.
pub fn draw_checkerboard(frame: &mut [u8], view: &ViewState) -> Result<(), RenderError> {
    let width = view.extent.width as usize;
    let height = view.extent.height as usize;

    if width == 0 || height == 0 {
        return Ok(());
    }

    let expected_len = width * height * BYTES_PER_PIXEL;
    if frame.len() != expected_len {
        return Err(RenderError::Present(format!(
            "frame length {} does not match expected {} for {}x{}",
            frame.len(),
            expected_len,
            width,
            height
        )));
    }

    let tile = tile_size(view.zoom);

    frame
        .par_chunks_exact_mut(width * BYTES_PER_PIXEL)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let colour = colour_at(view, tile, x, y);
                pixel[..3].copy_from_slice(&colour);
                pixel[3] = 255;
            }
        });

    Ok(())
}

fn colour_at(view: &ViewState, tile: f64, x: usize, y: usize) -> [u8; 3] {
    let centre_of_pixel = ScreenPoint::new(x as f64 + 0.5, y as f64 + 0.5);
    let (nx, ny) = view.extent.normalize(centre_of_pixel);
    let point = view.plane_point_at(nx, ny);

    let tile_x = (point.real / tile).floor() as i64;
    let tile_y = (point.imag / tile).floor() as i64;
    let is_dark = (tile_x + tile_y).rem_euclid(2) == 0;
    let inside = point.real * point.real + point.imag * point.imag <= ESCAPE_RADIUS_SQUARED;

    match (is_dark, inside) {
        (true, true) => DARK_INSIDE,
        (false, true) => LIGHT_INSIDE,
        (true, false) => DARK,
        (false, false) => LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::viewport_extent::ViewportExtent;

    fn view(center: Complex, zoom: f64, width: u32, height: u32) -> ViewState {
        ViewState {
            center,
            zoom,
            extent: ViewportExtent::new(width, height),
        }
    }

    fn pixel(frame: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * width + x) * BYTES_PER_PIXEL;
        [frame[offset], frame[offset + 1], frame[offset + 2], frame[offset + 3]]
    }

    #[test]
    fn tile_size_is_power_of_two_below_zoom() {
        assert_eq!(tile_size(1.0), 0.25);
        assert_eq!(tile_size(1.5), 0.25);
        assert_eq!(tile_size(4.0), 1.0);

        let small = tile_size(0.001);
        assert!(small < 0.001);
        assert_eq!(small.log2().fract(), 0.0);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let view = view(Complex::new(-0.5, 0.0), 1.0, 16, 8);
        let mut frame = vec![0; 16 * 8 * BYTES_PER_PIXEL];

        draw_checkerboard(&mut frame, &view).unwrap();

        assert!(frame.chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn neighbouring_tiles_alternate() {
        // 80x80 at zoom 1 maps 40 px to one plane unit, so a 0.25 tile is 10 px.
        let view = view(Complex::new(0.0, 0.0), 1.0, 80, 80);
        let mut frame = vec![0; 80 * 80 * BYTES_PER_PIXEL];

        draw_checkerboard(&mut frame, &view).unwrap();

        let a = pixel(&frame, 80, 45, 35);
        let b = pixel(&frame, 80, 55, 35);
        let c = pixel(&frame, 80, 65, 35);
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn far_points_are_not_tinted() {
        let view = view(Complex::new(10.0, 10.0), 1.0, 8, 8);
        let mut frame = vec![0; 8 * 8 * BYTES_PER_PIXEL];

        draw_checkerboard(&mut frame, &view).unwrap();

        for p in frame.chunks_exact(4) {
            assert!(p[..3] == DARK || p[..3] == LIGHT);
        }
    }

    #[test]
    fn mismatched_frame_is_rejected() {
        let view = view(Complex::new(0.0, 0.0), 1.0, 4, 4);
        let mut frame = vec![0; 10];

        let result = draw_checkerboard(&mut frame, &view);

        assert!(matches!(result, Err(RenderError::Present(_))));
    }

    #[test]
    fn degenerate_extent_draws_nothing() {
        let view = view(Complex::new(0.0, 0.0), 1.0, 0, 4);
        let mut frame = Vec::new();

        assert!(draw_checkerboard(&mut frame, &view).is_ok());
    }
}
