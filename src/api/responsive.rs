use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::layout::x_reading_texts;
use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, SurfaceMetrics};

use super::{ChartConfig, ChartEngine};

pub(super) const BASE_FONT_SIZE_PX: f64 = 10.0;
pub(super) const BASE_POINT_RADIUS_PX: f64 = 3.0;
const X_READING_CHAR_WIDTH_PX: f64 = 7.0;
const NARROW_HOST_HEIGHT_SLACK_PX: f64 = 10.0;

/// Size adjustments that keep readings and markers legible when the chart is
/// displayed narrower than its configured width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveState {
    pub font_size_px: f64,
    pub point_radius_px: f64,
    pub display_height: f64,
    pub hide_inner_x_readings: bool,
    /// Set while the surface could not be measured; cleared once it can.
    pub pending: bool,
}

impl ResponsiveState {
    #[must_use]
    pub fn for_config(config: &ChartConfig) -> Self {
        Self {
            font_size_px: BASE_FONT_SIZE_PX,
            point_radius_px: BASE_POINT_RADIUS_PX,
            display_height: config.viewport.height,
            hide_inner_x_readings: false,
            pending: true,
        }
    }

    /// Recomputes every adjustment from fresh surface metrics.
    pub fn apply(&mut self, metrics: SurfaceMetrics, config: &ChartConfig) -> ChartResult<()> {
        let SurfaceMetrics {
            rendered_width,
            host_width,
        } = metrics;
        if !rendered_width.is_finite() || rendered_width <= 0.0 || !host_width.is_finite() {
            return Err(ChartError::MeasurementUnavailable);
        }

        let width = config.viewport.width;
        let height = config.viewport.height;
        let ratio = width / rendered_width;
        let font_size_px = BASE_FONT_SIZE_PX * ratio;
        let point_radius_px = BASE_POINT_RADIUS_PX * ratio;
        if !(ratio.is_finite() && font_size_px.is_finite() && point_radius_px.is_finite())
            || ratio <= 0.0
        {
            return Err(ChartError::MeasurementUnavailable);
        }

        self.font_size_px = font_size_px;
        self.point_radius_px = point_radius_px;
        self.display_height = if host_width < width {
            (height * host_width / width - NARROW_HOST_HEIGHT_SLACK_PX).max(0.0)
        } else {
            height
        };
        self.hide_inner_x_readings = x_readings_crowded(config, rendered_width);
        self.pending = false;
        Ok(())
    }
}

/// Estimated x-reading text width exceeds the on-screen chart width.
#[must_use]
pub fn x_readings_crowded(config: &ChartConfig, rendered_width: f64) -> bool {
    let total: f64 = x_reading_texts(&config.x_axis)
        .iter()
        .map(|text| X_READING_CHAR_WIDTH_PX * text.chars().count() as f64)
        .sum();
    total > rendered_width
}

impl<R: Renderer> ChartEngine<R> {
    /// Host resize hook: re-measures the surface and re-renders when the
    /// adjustments could be applied.
    ///
    /// Returns `false` when measurement is unavailable; the adjustments then
    /// stay pending until the next draw or resize.
    pub fn on_resize(&mut self) -> ChartResult<bool> {
        if !self.refresh_responsive() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Applies responsive adjustments, deferring them when the surface cannot
    /// be measured. Never fails.
    pub(super) fn refresh_responsive(&mut self) -> bool {
        let applied = self
            .renderer
            .measure()
            .and_then(|metrics| self.core.responsive.apply(metrics, &self.core.config));
        match applied {
            Ok(()) => {
                trace!(
                    font_size_px = self.core.responsive.font_size_px,
                    point_radius_px = self.core.responsive.point_radius_px,
                    "responsive adjustments applied"
                );
                true
            }
            Err(err) => {
                warn!(error = %err, "deferring responsive adjustments");
                self.core.responsive.pending = true;
                false
            }
        }
    }
}
