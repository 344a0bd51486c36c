use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass, in screen space.
///
/// Lists are ordered back to front: grid and axis lines, series geometry,
/// then readings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    /// Height the host should display the surface at. Narrow hosts get less
    /// than `viewport.height`.
    pub display_height: f64,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            display_height: viewport.height,
            lines: Vec::new(),
            polylines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        if !self.display_height.is_finite() || self.display_height < 0.0 {
            return Err(ChartError::InvalidData(
                "display height must be finite and >= 0".to_owned(),
            ));
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// Number of data-bearing primitives (markers and blocks).
    #[must_use]
    pub fn data_primitive_count(&self) -> usize {
        self.circles.len() + self.rects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;

    #[test]
    fn new_frame_displays_at_configured_height() {
        let frame = RenderFrame::new(Viewport::new(120.0, 80.0));
        assert_eq!(frame.display_height, 80.0);
        assert!(frame.is_empty());
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn negative_display_height_is_rejected() {
        let mut frame = RenderFrame::new(Viewport::new(120.0, 80.0));
        frame.display_height = -1.0;
        assert!(frame.validate().is_err());
    }
}
