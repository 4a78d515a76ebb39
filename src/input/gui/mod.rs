//! GUI input adapter for interactive viewport exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the control overlay.

pub mod app;
pub mod commands;
pub mod errors;
pub mod translate;
