use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, SurfaceMetrics};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced. Measurement is unavailable unless metrics are
/// supplied.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
    pub last_frame: Option<RenderFrame>,
    pub metrics: Option<SurfaceMetrics>,
}

impl NullRenderer {
    #[must_use]
    pub fn with_metrics(metrics: SurfaceMetrics) -> Self {
        Self {
            metrics: Some(metrics),
            ..Self::default()
        }
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn measure(&self) -> ChartResult<SurfaceMetrics> {
        self.metrics.ok_or(ChartError::MeasurementUnavailable)
    }
}
