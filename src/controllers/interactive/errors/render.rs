#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("render surface is not available")]
    SurfaceUnavailable,
    #[error("failed to resize render surface to {width}x{height}: {message}")]
    Resize {
        width: u32,
        height: u32,
        message: String,
    },
    #[error("failed to present frame: {0}")]
    Present(String),
}
