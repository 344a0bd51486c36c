use crate::core::series::{
    BlockPrimitive, GrowAnimation, PointPlacement, Polyline, SeriesLayout, SeriesPrimitive,
    SeriesStyle, SeriesStyleKind,
};

/// One rectangle per datum, half a step wide, centered on the step.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockStyle;

impl SeriesStyle for BlockStyle {
    fn kind(&self) -> SeriesStyleKind {
        SeriesStyleKind::Block
    }

    fn place_point(&self, placement: &PointPlacement, layout: &SeriesLayout) -> SeriesPrimitive {
        let PointPlacement { point, tooltip } = placement;
        let height = point.y.round();
        SeriesPrimitive::Block(BlockPrimitive {
            raw_value: point.raw_value,
            x_center: point.x,
            x: point.x - layout.x_step / 4.0,
            width: layout.x_step / 2.0,
            height,
            tooltip: tooltip.clone(),
            grow: layout.animate_seconds.map(|duration_seconds| GrowAnimation {
                from: 0.0,
                to: height,
                duration_seconds,
            }),
        })
    }

    fn finish(&self, _primitives: &[SeriesPrimitive], _layout: &SeriesLayout) -> Option<Polyline> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::BlockStyle;
    use crate::core::axis::AxisSpec;
    use crate::core::mapper::CoordinateMapper;
    use crate::core::series::{PointPlacer, SeriesLayout, SeriesPrimitive, render_series};
    use crate::core::types::{ChartDirection, Viewport};

    #[test]
    fn blocks_are_centered_half_step_rectangles() {
        let x_axis = AxisSpec::new(50.0, 5, "x");
        let mapper =
            CoordinateMapper::new(Viewport::new(100.0, 50.0), ChartDirection::Ltr, &x_axis, 100.0);
        let data = [11.0, 50.0];
        let factors = mapper.factors(&data).expect("factors");
        let placer = PointPlacer::new(mapper, factors, "y");
        let layout = SeriesLayout::from_mapper(&mapper, Some(2.0));

        let series = render_series(&BlockStyle, &placer, &layout, &data).expect("render");
        assert!(series.polyline.is_none());

        let SeriesPrimitive::Block(first) = &series.primitives[0] else {
            panic!("block style must emit blocks");
        };
        assert_eq!(first.x_center, 20.0);
        assert_eq!(first.x, 15.0);
        assert_eq!(first.width, 10.0);
        // 11 * 0.5 = 5.5 rounds up.
        assert_eq!(first.height, 6.0);
        let grow = first.grow.expect("animated");
        assert_eq!((grow.from, grow.to, grow.duration_seconds), (0.0, 6.0, 2.0));
    }
}
