mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Layout facts reported by a live surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    /// Width the chart actually occupies on screen.
    pub rendered_width: f64,
    /// Width of the hosting window or container.
    pub host_width: f64,
}

impl SurfaceMetrics {
    #[must_use]
    pub fn new(rendered_width: f64, host_width: f64) -> Self {
        Self {
            rendered_width,
            host_width,
        }
    }
}

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from scaling and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Reports on-screen metrics. Surfaces without a live layout keep the
    /// default and report `MeasurementUnavailable`.
    fn measure(&self) -> ChartResult<SurfaceMetrics> {
        Err(ChartError::MeasurementUnavailable)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
