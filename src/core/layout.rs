use serde::{Deserialize, Serialize};

use crate::core::axis::{AxisSpec, step_size};
use crate::core::types::{ChartDirection, Viewport};

/// Which background grid lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    #[default]
    Off,
    Horizontal,
    Vertical,
    Both,
}

impl GridMode {
    #[must_use]
    pub fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    #[must_use]
    pub fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Straight segment in chart space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingAxis {
    Zero,
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingAnchor {
    Start,
    Middle,
    End,
}

/// Axis reading text placed in chart space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub axis: ReadingAxis,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: ReadingAnchor,
    pub visible: bool,
}

/// Inputs for the static (non-series) part of the chart.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    pub viewport: Viewport,
    pub direction: ChartDirection,
    pub x_axis: &'a AxisSpec,
    pub y_steps: u32,
    pub y_readings: &'a [f64],
    pub show_axes: bool,
    pub grid: GridMode,
    pub reading_height: f64,
    pub hide_inner_x_readings: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub grid_lines: Vec<Segment>,
    pub axis_lines: Vec<Segment>,
    pub readings: Vec<Reading>,
}

#[must_use]
pub fn format_reading(value: f64) -> String {
    format!("{value}")
}

/// Text of every x-axis reading, nearest-to-origin first.
#[must_use]
pub fn x_reading_texts(x_axis: &AxisSpec) -> Vec<String> {
    x_axis
        .tick_labels()
        .iter()
        .map(|value| format_reading(*value))
        .collect()
}

#[must_use]
pub fn build_chart_layout(input: LayoutInput<'_>) -> ChartLayout {
    let LayoutInput {
        viewport,
        direction,
        x_axis,
        y_steps,
        y_readings,
        show_axes,
        grid,
        reading_height,
        hide_inner_x_readings,
    } = input;
    let width = viewport.width;
    let height = viewport.height;
    let x_step = step_size(width, x_axis.steps);
    let y_step = step_size(height, y_steps);

    let mut layout = ChartLayout::default();

    if grid.horizontal() {
        for i in 0..y_steps {
            let y = y_step * f64::from(i + 1);
            layout.grid_lines.push(Segment {
                x1: 0.0,
                y1: y,
                x2: width,
                y2: y,
            });
        }
    }
    if grid.vertical() {
        for i in 0..x_axis.steps {
            let x = width - x_step * f64::from(i + 1);
            layout.grid_lines.push(Segment {
                x1: x,
                y1: 0.0,
                x2: x,
                y2: height,
            });
        }
    }

    let value_axis_x = direction.origin_x(width);
    if show_axes {
        layout.axis_lines.push(Segment {
            x1: 0.0,
            y1: 0.0,
            x2: width,
            y2: 0.0,
        });
        layout.axis_lines.push(Segment {
            x1: value_axis_x,
            y1: 0.0,
            x2: value_axis_x,
            y2: height,
        });
        layout.readings.push(Reading {
            axis: ReadingAxis::Zero,
            text: "0".to_owned(),
            x: if direction.is_rtl() { width + 5.0 } else { 0.0 },
            y: 0.0,
            anchor: ReadingAnchor::End,
            visible: true,
        });
    } else {
        layout.readings.push(Reading {
            axis: ReadingAxis::Zero,
            text: "0".to_owned(),
            x: value_axis_x,
            y: -(reading_height + 7.0),
            anchor: ReadingAnchor::Middle,
            visible: true,
        });
    }

    let x_texts = x_reading_texts(x_axis);
    let last_x = x_texts.len().saturating_sub(1);
    for (i, text) in x_texts.into_iter().enumerate() {
        let x_ltr = x_step * (i + 1) as f64;
        layout.readings.push(Reading {
            axis: ReadingAxis::X,
            text,
            x: direction.place_x(x_ltr, width),
            y: -(reading_height + 5.0),
            anchor: ReadingAnchor::Middle,
            visible: !(hide_inner_x_readings && i < last_x),
        });
    }

    let y_x = if direction.is_rtl() { width + 5.0 } else { -5.0 };
    for (i, value) in y_readings.iter().enumerate() {
        layout.readings.push(Reading {
            axis: ReadingAxis::Y,
            text: format_reading(*value),
            x: y_x,
            y: y_step * (i + 1) as f64 - reading_height / 4.0,
            anchor: ReadingAnchor::End,
            visible: true,
        });
    }

    layout
}
