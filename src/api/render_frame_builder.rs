use crate::core::{LayoutInput, ReadingAnchor, SeriesPrimitive, build_chart_layout};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::engine_core::EngineCore;

const GRID_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.12);
const AXIS_COLOR: Color = Color::rgb(0.25, 0.25, 0.25);
const READING_COLOR: Color = Color::rgb(0.35, 0.35, 0.35);
const SERIES_COLOR: Color = Color::rgb(0.16, 0.50, 0.73);
const GRID_STROKE_PX: f64 = 1.0;
const AXIS_STROKE_PX: f64 = 1.0;
const SERIES_STROKE_PX: f64 = 2.0;

/// Second render phase: turns retained chart-space geometry into a finished
/// screen-space frame. Nothing here mutates chart state.
pub(super) fn build_render_frame(core: &EngineCore) -> RenderFrame {
    let config = &core.config;
    let responsive = &core.responsive;
    let height = config.viewport.height;
    let flip = |y: f64| height - y;

    let layout = build_chart_layout(LayoutInput {
        viewport: config.viewport,
        direction: config.direction,
        x_axis: &config.x_axis,
        y_steps: config.y_axis.steps,
        y_readings: core.retained.y_readings(),
        show_axes: config.show_axes,
        grid: config.grid,
        reading_height: responsive.font_size_px,
        hide_inner_x_readings: responsive.hide_inner_x_readings,
    });

    let mut frame = RenderFrame::new(config.viewport);
    frame.display_height = responsive.display_height;

    for segment in &layout.grid_lines {
        frame.lines.push(LinePrimitive::new(
            segment.x1,
            flip(segment.y1),
            segment.x2,
            flip(segment.y2),
            GRID_STROKE_PX,
            GRID_COLOR,
        ));
    }
    for segment in &layout.axis_lines {
        frame.lines.push(LinePrimitive::new(
            segment.x1,
            flip(segment.y1),
            segment.x2,
            flip(segment.y2),
            AXIS_STROKE_PX,
            AXIS_COLOR,
        ));
    }

    for series in core.retained.series() {
        if let Some(polyline) = &series.polyline {
            frame.polylines.push(PolylinePrimitive {
                points: polyline.points.iter().map(|(x, y)| (*x, flip(*y))).collect(),
                stroke_width: SERIES_STROKE_PX,
                color: SERIES_COLOR,
                draw_in: polyline.draw_in,
            });
        }
        for primitive in &series.primitives {
            match primitive {
                SeriesPrimitive::Point(point) => frame.circles.push(CirclePrimitive {
                    cx: point.x,
                    cy: flip(point.y),
                    radius: responsive.point_radius_px,
                    fill_color: SERIES_COLOR,
                    tooltip: Some(point.tooltip.clone()),
                }),
                SeriesPrimitive::Block(block) => frame.rects.push(RectPrimitive {
                    x: block.x,
                    y: flip(block.height),
                    width: block.width,
                    height: block.height,
                    fill_color: SERIES_COLOR,
                    tooltip: Some(block.tooltip.clone()),
                    grow: block.grow,
                }),
            }
        }
    }

    for reading in layout.readings.into_iter().filter(|r| r.visible) {
        let h_align = match reading.anchor {
            ReadingAnchor::Start => TextHAlign::Left,
            ReadingAnchor::Middle => TextHAlign::Center,
            ReadingAnchor::End => TextHAlign::Right,
        };
        frame.texts.push(TextPrimitive::new(
            reading.text,
            reading.x,
            flip(reading.y),
            responsive.font_size_px,
            READING_COLOR,
            h_align,
        ));
    }

    frame
}
