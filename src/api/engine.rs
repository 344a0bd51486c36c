use crate::error::ChartResult;
use crate::render::Renderer;

use super::engine_core::EngineCore;
use super::render_frame_builder::build_render_frame;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the chart config, the retained geometry of every draw,
/// and the drawing surface. All calls take `&mut self`, so host events can
/// only interleave between draws.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    /// Rebuilds the frame from retained state and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = build_render_frame(&self.core);
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = build_render_frame(&self.core);
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
