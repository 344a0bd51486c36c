use serde::{Deserialize, Serialize};

use crate::core::{AxisSpec, ChartDirection, GridMode, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. After construction only
/// `y_axis.ceiling` changes, and only upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub direction: ChartDirection,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    #[serde(default)]
    pub animate_seconds: Option<f64>,
    #[serde(default = "default_show_axes")]
    pub show_axes: bool,
    #[serde(default)]
    pub grid: GridMode,
}

impl ChartConfig {
    /// Creates a left-to-right config with axes shown and no grid.
    #[must_use]
    pub fn new(viewport: Viewport, x_axis: AxisSpec, y_axis: AxisSpec) -> Self {
        Self {
            viewport,
            direction: ChartDirection::default(),
            x_axis,
            y_axis,
            animate_seconds: None,
            show_axes: default_show_axes(),
            grid: GridMode::default(),
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: ChartDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Enables draw-in/grow animation over `seconds`.
    #[must_use]
    pub fn with_animation(mut self, seconds: f64) -> Self {
        self.animate_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_axes_visible(mut self, visible: bool) -> Self {
        self.show_axes = visible;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridMode) -> Self {
        self.grid = grid;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        self.x_axis.validate("x")?;
        self.y_axis.validate("y")?;
        if let Some(seconds) = self.animate_seconds {
            if !seconds.is_finite() || seconds <= 0.0 {
                return Err(ChartError::InvalidData(
                    "animation duration must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}

fn default_show_axes() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::ChartConfig;
    use crate::core::{AxisSpec, ChartDirection, GridMode, Viewport};
    use crate::error::ChartError;

    #[test]
    fn json_config_fills_defaults() {
        let config = ChartConfig::from_json_str(
            r#"{
                "viewport": { "width": 100.0, "height": 50.0 },
                "direction": "rtl",
                "x_axis": { "ceiling": 50.0, "steps": 5, "label": "day" },
                "y_axis": { "ceiling": 100.0, "steps": 5 }
            }"#,
        )
        .expect("parse");

        assert_eq!(config.direction, ChartDirection::Rtl);
        assert_eq!(config.y_axis.label, "");
        assert!(config.show_axes);
        assert_eq!(config.grid, GridMode::Off);
        assert_eq!(config.animate_seconds, None);
    }

    #[test]
    fn validate_reports_axis_and_animation_problems() {
        let base = ChartConfig::new(
            Viewport::new(100.0, 50.0),
            AxisSpec::new(50.0, 5, "x"),
            AxisSpec::new(100.0, 5, "y"),
        );
        assert!(base.validate().is_ok());

        let mut bad_axis = base.clone();
        bad_axis.y_axis.steps = 0;
        assert!(matches!(
            bad_axis.validate(),
            Err(ChartError::InvalidAxisConfig { axis: "y", .. })
        ));

        assert!(base.clone().with_animation(0.0).validate().is_err());
        assert!(base.with_animation(1.0).validate().is_ok());
    }
}
