use crate::core::{ChartDirection, RenderedSeries, RetainedGeometry, Viewport};
use crate::render::Renderer;

use super::{ChartConfig, ChartEngine, ResponsiveState};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.core.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.config.viewport
    }

    #[must_use]
    pub fn direction(&self) -> ChartDirection {
        self.core.config.direction
    }

    /// Current value-axis ceiling (high-water mark).
    #[must_use]
    pub fn y_ceiling(&self) -> f64 {
        self.core.config.y_axis.ceiling
    }

    #[must_use]
    pub fn y_readings(&self) -> &[f64] {
        self.core.retained.y_readings()
    }

    #[must_use]
    pub fn retained(&self) -> &RetainedGeometry {
        &self.core.retained
    }

    #[must_use]
    pub fn series(&self) -> &[RenderedSeries] {
        self.core.retained.series()
    }

    #[must_use]
    pub fn responsive(&self) -> &ResponsiveState {
        &self.core.responsive
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
