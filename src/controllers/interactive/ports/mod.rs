//! Port definitions for the explorer controller.
//!
//! Contains the trait the controller drives to reach the external rendering
//! engine.

pub mod render_engine;
