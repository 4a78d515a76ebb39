//! Input-to-viewport state machines.
//!
//! Three sub-machines share one viewport:
//! - drag: `Idle`/`Dragging`, turns pointer deltas into pans
//! - wheel: stateless, turns scroll deltas into anchored zoom steps
//! - resize: stateless, asks the render engine to re-derive the surface extent

pub mod controller;
pub mod drag;
pub mod events;
pub mod settings;
pub mod wheel;

pub use controller::{CursorHint, Effect, InteractionController, Response};
pub use drag::DragState;
pub use events::{InputEvent, PointerButton};
pub use settings::InteractionSettings;
