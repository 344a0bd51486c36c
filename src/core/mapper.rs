use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::axis::{AxisSpec, step_size};
use crate::core::types::{ChartDirection, DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Largest value of a data set, or `None` when it is empty.
#[must_use]
pub fn dataset_max(data: &[f64]) -> Option<f64> {
    data.iter().copied().map(OrderedFloat).max().map(|m| m.0)
}

/// Vertical compression ratios derived once per data set.
///
/// `overflow_guard` keeps values taller than the surface inside it;
/// `axis_correction` normalizes the data maximum into the current ceiling.
/// Both may compound on the same value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MappingFactors {
    pub overflow_guard: f64,
    pub axis_correction: f64,
}

impl MappingFactors {
    #[must_use]
    pub fn from_max(max: f64, surface_height: f64, y_ceiling: f64) -> Self {
        let overflow_guard = if max > surface_height {
            surface_height / max
        } else {
            1.0
        };
        Self {
            overflow_guard,
            axis_correction: max / y_ceiling,
        }
    }

    #[must_use]
    pub fn vertical(self, raw_value: f64) -> f64 {
        let guarded = raw_value * self.overflow_guard;
        if self.axis_correction < 1.0 {
            guarded * self.axis_correction
        } else {
            guarded
        }
    }
}

/// Converts `(index, raw_value)` pairs into chart-space coordinates.
///
/// Every series style places its data through this mapper so line and block
/// output cannot drift apart.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a> {
    viewport: Viewport,
    direction: ChartDirection,
    x_axis: &'a AxisSpec,
    y_ceiling: f64,
}

impl<'a> CoordinateMapper<'a> {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        direction: ChartDirection,
        x_axis: &'a AxisSpec,
        y_ceiling: f64,
    ) -> Self {
        Self {
            viewport,
            direction,
            x_axis,
            y_ceiling,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn direction(&self) -> ChartDirection {
        self.direction
    }

    #[must_use]
    pub fn x_axis(&self) -> &'a AxisSpec {
        self.x_axis
    }

    /// Pixel width of one category step.
    #[must_use]
    pub fn x_step(&self) -> f64 {
        step_size(self.viewport.width, self.x_axis.steps)
    }

    /// Horizontal center of the 0-based `index`, mirrored for `Rtl`.
    #[must_use]
    pub fn horizontal(&self, index: usize) -> f64 {
        let x_ltr = self.x_step() * (index + 1) as f64;
        self.direction.place_x(x_ltr, self.viewport.width)
    }

    /// Category-axis value shown for `index`. Direction never mirrors it.
    #[must_use]
    pub fn x_reading(&self, index: usize) -> f64 {
        self.x_axis.reading_at(index + 1)
    }

    pub fn factors(&self, data: &[f64]) -> ChartResult<MappingFactors> {
        let max = dataset_max(data).ok_or(ChartError::EmptyDataSet)?;
        Ok(MappingFactors::from_max(
            max,
            self.viewport.height,
            self.y_ceiling,
        ))
    }

    #[must_use]
    pub fn place(&self, factors: MappingFactors, index: usize, raw_value: f64) -> DataPoint {
        DataPoint::new(
            index,
            raw_value,
            self.horizontal(index),
            factors.vertical(raw_value),
        )
    }

    pub fn map_dataset(&self, data: &[f64]) -> ChartResult<Vec<DataPoint>> {
        let factors = self.factors(data)?;
        Ok(data
            .iter()
            .enumerate()
            .map(|(index, raw)| self.place(factors, index, *raw))
            .collect())
    }
}
