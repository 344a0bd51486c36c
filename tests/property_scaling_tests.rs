use blockline::api::{ChartConfig, ChartEngine};
use blockline::core::{AxisSpec, SeriesPrimitive, SeriesStyleKind, Viewport};
use blockline::render::NullRenderer;
use proptest::prelude::*;

fn engine(ceiling: f64, steps: u32) -> ChartEngine<NullRenderer> {
    let config = ChartConfig::new(
        Viewport::new(400.0, 120.0),
        AxisSpec::new(100.0, steps, "x"),
        AxisSpec::new(ceiling, 5, "y"),
    );
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn style_strategy() -> impl Strategy<Value = SeriesStyleKind> {
    prop_oneof![Just(SeriesStyleKind::Line), Just(SeriesStyleKind::Block)]
}

proptest! {
    #[test]
    fn vertical_values_are_monotone_under_the_ceiling(
        data in proptest::collection::vec(0.0f64..500.0, 1..24)
    ) {
        let mut engine = engine(500.0, 24);
        engine.draw(&data, SeriesStyleKind::Line).expect("draw");
        prop_assert_eq!(engine.y_ceiling(), 500.0);

        let mut pairs: Vec<(f64, f64)> = engine.series()[0]
            .primitives
            .iter()
            .map(|primitive| match primitive {
                SeriesPrimitive::Point(point) => (point.raw_value, point.y),
                SeriesPrimitive::Block(block) => (block.raw_value, block.height),
            })
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in pairs.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn ceiling_never_decreases(
        draws in proptest::collection::vec(
            proptest::collection::vec(0.0f64..10_000.0, 0..12),
            1..8
        ),
        style in style_strategy()
    ) {
        let mut engine = engine(50.0, 12);
        let mut previous = engine.y_ceiling();
        for data in &draws {
            engine.draw(data, style).expect("draw");
            prop_assert!(engine.y_ceiling() >= previous);
            previous = engine.y_ceiling();
        }
    }

    #[test]
    fn redrawing_unchanged_data_is_idempotent(
        data in proptest::collection::vec(0.0f64..1_000.0, 1..12),
        ceiling in 1.0f64..1_000.0,
        style in style_strategy()
    ) {
        let mut engine = engine(ceiling, 12);
        engine.draw(&data, style).expect("first draw");
        let ceiling_after_first = engine.y_ceiling();
        let first = engine.series()[0].clone();

        engine.draw(&data, style).expect("second draw");
        prop_assert_eq!(engine.y_ceiling(), ceiling_after_first);
        prop_assert_eq!(&engine.series()[0], &first);
        prop_assert_eq!(&engine.series()[1], &first);
    }

    #[test]
    fn mapped_points_stay_inside_the_surface(
        data in proptest::collection::vec(0.0f64..5_000.0, 1..12),
        ceiling in 1.0f64..5_000.0
    ) {
        let mut engine = engine(ceiling, 12);
        engine.draw(&data, SeriesStyleKind::Line).expect("draw");
        for primitive in &engine.series()[0].primitives {
            let SeriesPrimitive::Point(point) = primitive else {
                panic!("expected points");
            };
            prop_assert!((0.0..=400.0).contains(&point.x));
            prop_assert!(point.y >= 0.0);
            prop_assert!(point.y <= 120.0 + 1e-9);
        }
    }
}
