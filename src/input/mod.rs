//! Input adapters for the viewport explorer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into domain requests.

#[cfg(feature = "gui")]
pub mod gui;
