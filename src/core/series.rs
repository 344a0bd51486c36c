use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::mapper::{CoordinateMapper, MappingFactors};
use crate::core::polyline::polyline_length;
use crate::core::types::{ChartDirection, DataPoint, Viewport};
use crate::core::{BlockStyle, LineStyle};
use crate::error::{ChartError, ChartResult};

/// Rendering style selectable by host applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStyleKind {
    Line,
    Block,
}

impl SeriesStyleKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Block => "block",
        }
    }

    #[must_use]
    pub fn style(self) -> &'static dyn SeriesStyle {
        static LINE: LineStyle = LineStyle;
        static BLOCK: BlockStyle = BlockStyle;
        match self {
            Self::Line => &LINE,
            Self::Block => &BLOCK,
        }
    }
}

impl fmt::Display for SeriesStyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesStyleKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "block" => Ok(Self::Block),
            other => Err(ChartError::InvalidData(format!(
                "unknown series style `{other}`"
            ))),
        }
    }
}

/// Hover text attached to each datum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipDescriptor {
    pub x_text: String,
    pub y_text: String,
}

/// A datum placed by the shared mapper, ready for a style to consume.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPlacement {
    pub point: DataPoint,
    pub tooltip: TooltipDescriptor,
}

/// Places data for every style using one set of mapping factors.
#[derive(Debug, Clone, Copy)]
pub struct PointPlacer<'a> {
    mapper: CoordinateMapper<'a>,
    factors: MappingFactors,
    y_label: &'a str,
}

impl<'a> PointPlacer<'a> {
    #[must_use]
    pub fn new(mapper: CoordinateMapper<'a>, factors: MappingFactors, y_label: &'a str) -> Self {
        Self {
            mapper,
            factors,
            y_label,
        }
    }

    #[must_use]
    pub fn factors(&self) -> MappingFactors {
        self.factors
    }

    #[must_use]
    pub fn place_point(&self, index: usize, raw_value: f64) -> PointPlacement {
        let point = self.mapper.place(self.factors, index, raw_value);
        let tooltip = TooltipDescriptor {
            x_text: format!(
                "{}: {}",
                self.mapper.x_axis().label,
                self.mapper.x_reading(index)
            ),
            y_text: format!("{}: {}", self.y_label, raw_value),
        };
        PointPlacement { point, tooltip }
    }
}

/// Surface facts every style needs while emitting primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesLayout {
    pub viewport: Viewport,
    pub direction: ChartDirection,
    pub x_step: f64,
    pub animate_seconds: Option<f64>,
}

impl SeriesLayout {
    #[must_use]
    pub fn from_mapper(mapper: &CoordinateMapper<'_>, animate_seconds: Option<f64>) -> Self {
        Self {
            viewport: mapper.viewport(),
            direction: mapper.direction(),
            x_step: mapper.x_step(),
            animate_seconds,
        }
    }

    #[must_use]
    pub fn origin_anchor(&self) -> (f64, f64) {
        (self.direction.origin_x(self.viewport.width), 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointPrimitive {
    pub raw_value: f64,
    pub x: f64,
    pub y: f64,
    pub tooltip: TooltipDescriptor,
}

/// Stroke-dash draw-in sized from the path length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawInAnimation {
    pub duration_seconds: f64,
    pub dash_array_px: f64,
    pub dash_offset_px: f64,
}

impl DrawInAnimation {
    #[must_use]
    pub fn for_length(duration_seconds: f64, length: f64) -> Self {
        Self {
            duration_seconds,
            dash_array_px: length * 2.0,
            dash_offset_px: length * 2.0,
        }
    }
}

/// Connecting path of a line series, origin anchor first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub length: f64,
    pub draw_in: Option<DrawInAnimation>,
}

impl Polyline {
    #[must_use]
    pub fn through(
        anchor: (f64, f64),
        points: impl IntoIterator<Item = (f64, f64)>,
        animate_seconds: Option<f64>,
    ) -> Self {
        let points: Vec<(f64, f64)> = std::iter::once(anchor).chain(points).collect();
        let length = polyline_length(&points);
        Self {
            points,
            length,
            draw_in: animate_seconds.map(|seconds| DrawInAnimation::for_length(seconds, length)),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }
}

/// From-zero height growth of a block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPrimitive {
    pub raw_value: f64,
    pub x_center: f64,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip: TooltipDescriptor,
    pub grow: Option<GrowAnimation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeriesPrimitive {
    Point(PointPrimitive),
    Block(BlockPrimitive),
}

impl SeriesPrimitive {
    #[must_use]
    pub fn raw_value(&self) -> f64 {
        match self {
            Self::Point(point) => point.raw_value,
            Self::Block(block) => block.raw_value,
        }
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipDescriptor {
        match self {
            Self::Point(point) => &point.tooltip,
            Self::Block(block) => &block.tooltip,
        }
    }

    /// Top of the primitive in chart space.
    #[must_use]
    pub fn top(&self) -> f64 {
        match self {
            Self::Point(point) => point.y,
            Self::Block(block) => block.height,
        }
    }
}

/// Everything one draw call produced for a single data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSeries {
    pub style: SeriesStyleKind,
    pub primitives: Vec<SeriesPrimitive>,
    pub polyline: Option<Polyline>,
}

impl RenderedSeries {
    #[must_use]
    pub fn raw_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.primitives.iter().map(SeriesPrimitive::raw_value)
    }

    /// Scales stored vertical geometry by `factor` and rebuilds the polyline
    /// from the corrected points in their original order.
    pub fn shrink_vertical(&mut self, factor: f64) {
        for primitive in &mut self.primitives {
            match primitive {
                SeriesPrimitive::Point(point) => point.y *= factor,
                SeriesPrimitive::Block(block) => {
                    block.height *= factor;
                    if let Some(grow) = block.grow.as_mut() {
                        grow.to *= factor;
                    }
                }
            }
        }

        if let Some(polyline) = self.polyline.take() {
            let anchor = polyline.anchor().unwrap_or((0.0, 0.0));
            let seconds = polyline.draw_in.map(|draw_in| draw_in.duration_seconds);
            let corrected = self.primitives.iter().filter_map(|primitive| match primitive {
                SeriesPrimitive::Point(point) => Some((point.x, point.y)),
                SeriesPrimitive::Block(_) => None,
            });
            self.polyline = Some(Polyline::through(anchor, corrected, seconds));
        }
    }
}

/// Capability shared by every chart style.
///
/// Styles never compute vertical values themselves; they receive points
/// already placed by `PointPlacer`.
pub trait SeriesStyle: Sync {
    fn kind(&self) -> SeriesStyleKind;

    fn place_point(&self, placement: &PointPlacement, layout: &SeriesLayout) -> SeriesPrimitive;

    /// Series-level geometry emitted after every datum has been placed.
    fn finish(&self, primitives: &[SeriesPrimitive], layout: &SeriesLayout) -> Option<Polyline>;
}

/// Places `data` through `placer` and lets `style` emit its primitives.
pub fn render_series(
    style: &dyn SeriesStyle,
    placer: &PointPlacer<'_>,
    layout: &SeriesLayout,
    data: &[f64],
) -> ChartResult<RenderedSeries> {
    if data.is_empty() {
        return Err(ChartError::EmptyDataSet);
    }

    let primitives: Vec<SeriesPrimitive> = data
        .iter()
        .enumerate()
        .map(|(index, raw)| style.place_point(&placer.place_point(index, *raw), layout))
        .collect();
    let polyline = style.finish(&primitives, layout);

    Ok(RenderedSeries {
        style: style.kind(),
        primitives,
        polyline,
    })
}
