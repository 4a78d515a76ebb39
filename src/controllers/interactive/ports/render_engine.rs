use crate::controllers::interactive::errors::render::RenderError;
use crate::core::data::viewport_extent::ViewportExtent;
use crate::core::viewport::ViewState;

/// The external engine that turns a viewport into pixels.
///
/// The controller never inspects the surface itself; it asks the engine for
/// the current extent after a resize and hands it a snapshot to draw.
pub trait RenderEnginePort {
    fn render_frame(&mut self, view: &ViewState) -> Result<(), RenderError>;

    /// Re-reads the drawing surface size, resizing internal buffers as needed.
    fn notify_resize(&mut self) -> Result<ViewportExtent, RenderError>;
}
