use std::marker::PhantomData;

use tracing::info;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};

use crate::config::ExplorerConfig;
use crate::controllers::interactive::ExplorerController;
use crate::input::gui::app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self { presenter_factory, config, _phantom: PhantomData }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        let window_config = &self.config.window;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(window_config.title.as_str())
                .with_inner_size(LogicalSize::new(window_config.width, window_config.height))
                .with_min_inner_size(LogicalSize::new(window_config.min_width, window_config.min_height))
                .build(&event_loop)?,
        ));

        info!(title = %window_config.title, "window created");

        let presenter: P = self.presenter_factory.build(window)?;
        let controller = ExplorerController::new(&self.config, presenter);
        let app = GuiApp::new(window, &event_loop, controller);

        app.run(event_loop)
    }
}
