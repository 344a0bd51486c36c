use crate::core::series::{
    PointPlacement, PointPrimitive, Polyline, SeriesLayout, SeriesPrimitive, SeriesStyle,
    SeriesStyleKind,
};

/// Points joined by a polyline that starts at the origin anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineStyle;

impl SeriesStyle for LineStyle {
    fn kind(&self) -> SeriesStyleKind {
        SeriesStyleKind::Line
    }

    fn place_point(&self, placement: &PointPlacement, _layout: &SeriesLayout) -> SeriesPrimitive {
        let PointPlacement { point, tooltip } = placement;
        SeriesPrimitive::Point(PointPrimitive {
            raw_value: point.raw_value,
            x: point.x,
            y: point.y,
            tooltip: tooltip.clone(),
        })
    }

    fn finish(&self, primitives: &[SeriesPrimitive], layout: &SeriesLayout) -> Option<Polyline> {
        let points = primitives.iter().filter_map(|primitive| match primitive {
            SeriesPrimitive::Point(point) => Some((point.x, point.y)),
            SeriesPrimitive::Block(_) => None,
        });
        Some(Polyline::through(
            layout.origin_anchor(),
            points,
            layout.animate_seconds,
        ))
    }
}
