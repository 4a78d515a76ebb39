//! Explorer configuration loaded from an optional JSON file.
//!
//! Every field has a default, so a partial file (or none at all) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;
use crate::core::interaction::settings::InteractionSettings;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::viewport::{DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::core::viewport::Viewport;

/// Names the JSON file to load. Unset means built-in defaults.
pub const CONFIG_PATH_ENV: &str = "EXPLORER_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub default_center: Complex,
    pub default_zoom: f64,
    #[serde(flatten)]
    pub limits: ViewportLimits,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            limits: ViewportLimits::default(),
        }
    }
}

/// Window sizes are logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mandelbrot Explorer".to_owned(),
            width: 800,
            height: 600,
            min_width: 200,
            min_height: 200,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub viewport: ViewportConfig,
    pub interaction: InteractionSettings,
    pub window: WindowConfig,
}

impl ExplorerConfig {
    /// Loads the file named by `EXPLORER_CONFIG`, or the defaults when the
    /// variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_path(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let viewport = &self.viewport;
        let limits = &viewport.limits;

        if !viewport.default_center.is_finite() {
            return Err(invalid("viewport.default_center must be finite"));
        }
        if !is_positive(limits.min_zoom) || !is_positive(limits.max_zoom) {
            return Err(invalid("viewport zoom bounds must be finite and positive"));
        }
        if limits.min_zoom > limits.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "viewport.min_zoom {} exceeds viewport.max_zoom {}",
                limits.min_zoom, limits.max_zoom
            )));
        }
        if !viewport.default_zoom.is_finite()
            || viewport.default_zoom < limits.min_zoom
            || viewport.default_zoom > limits.max_zoom
        {
            return Err(ConfigError::Invalid(format!(
                "viewport.default_zoom {} is outside [{}, {}]",
                viewport.default_zoom, limits.min_zoom, limits.max_zoom
            )));
        }
        if !is_positive(limits.plane_span) {
            return Err(invalid("viewport.plane_span must be finite and positive"));
        }

        let interaction = &self.interaction;
        if !is_positive(interaction.drag_sensitivity) {
            return Err(invalid("interaction.drag_sensitivity must be finite and positive"));
        }
        if !is_positive(interaction.wheel_step_divisor) {
            return Err(invalid("interaction.wheel_step_divisor must be finite and positive"));
        }

        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(invalid("window size must be non-zero"));
        }
        if window.min_width > window.width || window.min_height > window.height {
            return Err(invalid("window minimum size exceeds the initial size"));
        }

        Ok(())
    }

    #[must_use]
    pub fn build_viewport(&self) -> Viewport {
        Viewport::new(
            self.viewport.default_center,
            self.viewport.default_zoom,
            self.viewport.limits,
        )
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid(message.to_owned())
}
