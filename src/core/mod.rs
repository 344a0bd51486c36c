pub mod axis;
pub mod block_series;
pub mod layout;
pub mod line_series;
pub mod mapper;
pub mod polyline;
pub mod primitives;
pub mod retained;
pub mod scaling;
pub mod series;
pub mod types;

pub use axis::{AxisSpec, TickLabels, step_size, tick_labels_for};
pub use block_series::BlockStyle;
pub use layout::{
    ChartLayout, GridMode, LayoutInput, Reading, ReadingAnchor, ReadingAxis, Segment,
    build_chart_layout,
};
pub use line_series::LineStyle;
pub use mapper::{CoordinateMapper, MappingFactors, dataset_max};
pub use polyline::polyline_length;
pub use retained::RetainedGeometry;
pub use scaling::{ScalingCorrector, ScalingOutcome};
pub use series::{
    BlockPrimitive, DrawInAnimation, GrowAnimation, PointPlacement, PointPlacer, PointPrimitive,
    Polyline, RenderedSeries, SeriesLayout, SeriesPrimitive, SeriesStyle, SeriesStyleKind,
    TooltipDescriptor, render_series,
};
pub use types::{ChartDirection, DataPoint, Viewport};
