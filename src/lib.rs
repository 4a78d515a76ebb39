pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;
pub mod storage;

pub use config::{ConfigError, ExplorerConfig};
pub use controllers::interactive::{ExplorerController, RenderEnginePort, RenderError};
pub use crate::core::data::complex::Complex;
pub use crate::core::interaction::{CursorHint, Effect, InputEvent, InteractionController, Response};
pub use crate::core::viewport::{ViewState, Viewport};
pub use presenters::headless::engine::HeadlessRenderEngine;
pub use storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
