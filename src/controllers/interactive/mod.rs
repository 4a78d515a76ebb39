//! Application layer for interactive viewport exploration.
//!
//! # Architecture
//!
//! The explorer controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent` values translated by a host (GUI, script, test)
//! - **Output**: `RenderEnginePort` for drawing frames and measuring the surface
//! - **Core**: the viewport model and interaction state machines from `core/`

mod controller;
pub mod errors;
pub mod ports;

pub use controller::ExplorerController;
pub use errors::render::RenderError;
pub use ports::render_engine::RenderEnginePort;
