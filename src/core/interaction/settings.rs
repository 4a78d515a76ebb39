use serde::{Deserialize, Serialize};

pub const DEFAULT_DRAG_SENSITIVITY: f64 = 2.0;
pub const DEFAULT_WHEEL_STEP_DIVISOR: f64 = 5.0;
pub const CONTROL_PANEL_TARGET: &str = "control_panel";
pub const SHOW_BUTTON_TARGET: &str = "show_button";

/// Tuning for the drag and wheel sub-machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Multiplier applied to raw pointer deltas before panning.
    pub drag_sensitivity: f64,
    /// A wheel notch changes zoom by `current_zoom / wheel_step_divisor`.
    pub wheel_step_divisor: f64,
    /// Overlay elements the pointer may cross without ending a drag.
    pub overlay_targets: Vec<String>,
}

impl InteractionSettings {
    #[must_use]
    pub fn is_overlay_target(&self, target: Option<&str>) -> bool {
        target.is_some_and(|id| self.overlay_targets.iter().any(|allowed| allowed == id))
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            wheel_step_divisor: DEFAULT_WHEEL_STEP_DIVISOR,
            overlay_targets: vec![
                CONTROL_PANEL_TARGET.to_owned(),
                SHOW_BUTTON_TARGET.to_owned(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_overlay_targets_are_allow_listed() {
        let settings = InteractionSettings::default();

        assert!(settings.is_overlay_target(Some("control_panel")));
        assert!(settings.is_overlay_target(Some("show_button")));
    }

    #[test]
    fn missing_or_unlisted_target_is_not_overlay() {
        let settings = InteractionSettings::default();

        assert!(!settings.is_overlay_target(None));
        assert!(!settings.is_overlay_target(Some("footer")));
        assert!(!settings.is_overlay_target(Some("")));
    }
}
