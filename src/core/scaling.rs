use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::axis::{AxisSpec, tick_labels_for};
use crate::core::mapper::dataset_max;
use crate::core::retained::RetainedGeometry;
use crate::error::{ChartError, ChartResult};

/// What one correction pass did to the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScalingOutcome {
    /// The ceiling was raised to the data maximum and retained geometry was
    /// compressed by `shrink`.
    Grown {
        previous_ceiling: f64,
        ceiling: f64,
        shrink: f64,
    },
    /// The data fits under the ceiling; `axis_correction` is the proportional
    /// compression the mapper applies to the incoming values.
    Fitted { axis_correction: f64 },
}

impl ScalingOutcome {
    #[must_use]
    pub fn grew(self) -> bool {
        matches!(self, Self::Grown { .. })
    }

    /// Correction still owed by the incoming data set after this pass.
    #[must_use]
    pub fn axis_correction(self) -> f64 {
        match self {
            Self::Grown { .. } => 1.0,
            Self::Fitted { axis_correction } => axis_correction,
        }
    }
}

/// Sole writer of the value-axis ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalingCorrector;

impl ScalingCorrector {
    /// Ratchets `y_axis.ceiling` up to `max(data)` when needed.
    ///
    /// Growing rewrites the retained readings on the unchanged pixel grid and
    /// shrinks every retained series by `old_ceiling / max(data)`. The ceiling
    /// never decreases.
    pub fn correct(
        y_axis: &mut AxisSpec,
        retained: &mut RetainedGeometry,
        data: &[f64],
    ) -> ChartResult<ScalingOutcome> {
        let max = dataset_max(data).ok_or(ChartError::EmptyDataSet)?;

        if max > y_axis.ceiling {
            let previous_ceiling = y_axis.ceiling;
            let shrink = previous_ceiling / max;

            retained.set_y_readings(tick_labels_for(max, y_axis.steps));
            for series in retained.series_mut() {
                series.shrink_vertical(shrink);
            }
            y_axis.ceiling = max;

            debug!(
                previous_ceiling,
                ceiling = max,
                shrink,
                retained_series = retained.series().len(),
                "value axis ceiling grown"
            );
            return Ok(ScalingOutcome::Grown {
                previous_ceiling,
                ceiling: max,
                shrink,
            });
        }

        let axis_correction = max / y_axis.ceiling;
        trace!(axis_correction, ceiling = y_axis.ceiling, "data fits value axis");
        Ok(ScalingOutcome::Fitted { axis_correction })
    }
}
