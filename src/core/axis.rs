use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Inline capacity covers the usual 5..=12 reading axes without allocating.
pub type TickLabels = SmallVec<[f64; 12]>;

/// Value range and reading cadence of one chart axis.
///
/// `ceiling` is the value represented by the far end of the axis. For the
/// value axis it is a high-water mark: it only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub ceiling: f64,
    pub steps: u32,
    #[serde(default)]
    pub label: String,
}

impl AxisSpec {
    #[must_use]
    pub fn new(ceiling: f64, steps: u32, label: impl Into<String>) -> Self {
        Self {
            ceiling,
            steps,
            label: label.into(),
        }
    }

    pub fn validate(&self, axis: &'static str) -> ChartResult<()> {
        if self.steps == 0 {
            return Err(ChartError::InvalidAxisConfig {
                axis,
                reason: "steps must be >= 1".to_owned(),
            });
        }
        if !self.ceiling.is_finite() || self.ceiling <= 0.0 {
            return Err(ChartError::InvalidAxisConfig {
                axis,
                reason: format!("ceiling must be finite and > 0, got {}", self.ceiling),
            });
        }
        Ok(())
    }

    /// Rounded reading for every step, nearest-to-origin first.
    #[must_use]
    pub fn tick_labels(&self) -> TickLabels {
        tick_labels_for(self.ceiling, self.steps)
    }

    /// Unrounded axis value at 1-based `step` position.
    #[must_use]
    pub fn reading_at(&self, step: usize) -> f64 {
        step as f64 * (self.ceiling / f64::from(self.steps))
    }

    #[must_use]
    pub fn step_size(&self, dimension_px: f64) -> f64 {
        step_size(dimension_px, self.steps)
    }
}

#[must_use]
pub fn step_size(dimension_px: f64, steps: u32) -> f64 {
    dimension_px / f64::from(steps)
}

/// Readings `round(i * ceiling / steps)` for `i in 1..=steps`.
#[must_use]
pub fn tick_labels_for(ceiling: f64, steps: u32) -> TickLabels {
    let step_value = ceiling / f64::from(steps);
    (1..=steps)
        .map(|i| (step_value * f64::from(i)).round())
        .collect()
}
