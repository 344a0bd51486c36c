use crate::core::axis::{AxisSpec, TickLabels};
use crate::core::series::RenderedSeries;

/// Geometry kept between draws so later draws can correct it in place.
///
/// Series are stored in draw order; each draw appends one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetainedGeometry {
    series: Vec<RenderedSeries>,
    y_readings: TickLabels,
}

impl RetainedGeometry {
    #[must_use]
    pub fn for_axis(y_axis: &AxisSpec) -> Self {
        Self {
            series: Vec::new(),
            y_readings: y_axis.tick_labels(),
        }
    }

    #[must_use]
    pub fn series(&self) -> &[RenderedSeries] {
        &self.series
    }

    pub fn series_mut(&mut self) -> &mut [RenderedSeries] {
        &mut self.series
    }

    #[must_use]
    pub fn y_readings(&self) -> &[f64] {
        &self.y_readings
    }

    pub fn set_y_readings(&mut self, readings: TickLabels) {
        self.y_readings = readings;
    }

    pub fn push_series(&mut self, series: RenderedSeries) {
        self.series.push(series);
    }

    /// Raw values of every retained series, in draw then data order.
    #[must_use]
    pub fn raw_values(&self) -> Vec<f64> {
        self.series
            .iter()
            .flat_map(RenderedSeries::raw_values)
            .collect()
    }

    /// Detaches every series, returning how many were removed.
    pub fn clear_series(&mut self) -> usize {
        let removed = self.series.len();
        self.series.clear();
        removed
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.series.iter().map(|series| series.primitives.len()).sum()
    }
}
