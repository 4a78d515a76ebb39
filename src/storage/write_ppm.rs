use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::viewport_extent::ViewportExtent;

/// Writes an RGBA frame as a binary PPM, dropping the alpha channel.
pub fn write_ppm(rgba: &[u8], extent: ViewportExtent, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let expected_len = extent.width as usize * extent.height as usize * 4;
    if rgba.len() != expected_len {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "frame length {} does not match {}x{}",
                rgba.len(),
                extent.width,
                extent.height
            ),
        ));
    }

    let mut file = BufWriter::new(std::fs::File::create(filepath)?);

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", extent.width, extent.height)?;
    writeln!(file, "255")?;

    for pixel in rgba.chunks_exact(4) {
        file.write_all(&pixel[..3])?;
    }

    file.flush()
}
