use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::{decimals_to_f64, validate_raw_values};
use crate::core::{
    CoordinateMapper, MappingFactors, PointPlacer, RenderedSeries, ScalingCorrector,
    ScalingOutcome, SeriesLayout, SeriesStyleKind, render_series,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartConfig, ChartEngine};

/// Result of one `draw` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// No values were supplied; only axes, grid and readings were rendered.
    EmptyDataSet,
    Drawn {
        scaling: ScalingOutcome,
        factors: MappingFactors,
        primitives: usize,
    },
}

impl<R: Renderer> ChartEngine<R> {
    /// Draws `data` as a new series in `style`.
    ///
    /// The value-axis ceiling is corrected first, which may shrink geometry
    /// retained from earlier draws. The finished frame is then handed to the
    /// renderer in one pass.
    pub fn draw(&mut self, data: &[f64], style: SeriesStyleKind) -> ChartResult<DrawOutcome> {
        validate_raw_values(data)?;
        debug!(count = data.len(), %style, "draw series");

        if data.is_empty() {
            debug!("empty data set, rendering axes only");
            self.present()?;
            return Ok(DrawOutcome::EmptyDataSet);
        }

        let scaling =
            ScalingCorrector::correct(&mut self.core.config.y_axis, &mut self.core.retained, data)?;
        let (series, factors) = layout_series(&self.core.config, data, style)?;
        let primitives = series.primitives.len();
        self.core.retained.push_series(series);
        self.present()?;

        Ok(DrawOutcome::Drawn {
            scaling,
            factors,
            primitives,
        })
    }

    /// Decimal-input variant of [`ChartEngine::draw`].
    pub fn draw_decimal(
        &mut self,
        data: &[Decimal],
        style: SeriesStyleKind,
    ) -> ChartResult<DrawOutcome> {
        let values = decimals_to_f64(data)?;
        self.draw(&values, style)
    }

    /// Redraws every retained value in a different style.
    ///
    /// All retained series are detached before the new one is laid out, so
    /// no geometry from the previous style survives.
    pub fn change_style(&mut self, style: SeriesStyleKind) -> ChartResult<DrawOutcome> {
        let data = self.core.retained.raw_values();
        let removed = self.core.retained.clear_series();
        debug!(removed, count = data.len(), %style, "change series style");
        self.draw(&data, style)
    }

    fn present(&mut self) -> ChartResult<()> {
        self.refresh_responsive();
        self.render()
    }
}

/// Maps `data` under the current ceiling and lets `style` emit primitives.
fn layout_series(
    config: &ChartConfig,
    data: &[f64],
    style: SeriesStyleKind,
) -> ChartResult<(RenderedSeries, MappingFactors)> {
    let mapper = CoordinateMapper::new(
        config.viewport,
        config.direction,
        &config.x_axis,
        config.y_axis.ceiling,
    );
    let factors = mapper.factors(data)?;
    let placer = PointPlacer::new(mapper, factors, &config.y_axis.label);
    let layout = SeriesLayout::from_mapper(&mapper, config.animate_seconds);
    let series = render_series(style.style(), &placer, &layout, data)?;
    Ok((series, factors))
}
