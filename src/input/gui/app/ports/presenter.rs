use egui::Context as EguiContext;
use winit::window::Window;

use crate::controllers::interactive::ports::render_engine::RenderEnginePort;
use crate::input::gui::errors::GuiError;

/// A render engine that can also put the egui overlay on screen.
pub trait GuiPresenterPort: RenderEnginePort {
    fn new(window: &'static Window) -> Result<Self, GuiError>
    where
        Self: Sized;

    /// Draws the last rendered frame with the overlay on top.
    fn present(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
}
