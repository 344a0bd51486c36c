use approx::assert_relative_eq;
use blockline::api::{ChartConfig, ChartEngine, DrawOutcome};
use blockline::core::{
    AxisSpec, ChartDirection, ScalingOutcome, SeriesPrimitive, SeriesStyleKind, Viewport,
};
use blockline::render::NullRenderer;

fn scenario_config() -> ChartConfig {
    ChartConfig::new(
        Viewport::new(100.0, 50.0),
        AxisSpec::new(50.0, 5, "x"),
        AxisSpec::new(100.0, 5, "y"),
    )
}

fn point_coords(primitives: &[SeriesPrimitive]) -> Vec<(f64, f64)> {
    primitives
        .iter()
        .map(|primitive| match primitive {
            SeriesPrimitive::Point(point) => (point.x, point.y),
            SeriesPrimitive::Block(_) => panic!("expected line points"),
        })
        .collect()
}

#[test]
fn scenario_one_line_draw_fills_half_the_ceiling() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), scenario_config()).expect("engine init");

    let outcome = engine
        .draw(&[10.0, 20.0, 30.0, 40.0, 50.0], SeriesStyleKind::Line)
        .expect("draw");
    let DrawOutcome::Drawn {
        scaling, factors, ..
    } = outcome
    else {
        panic!("expected drawn outcome");
    };
    assert_eq!(scaling, ScalingOutcome::Fitted { axis_correction: 0.5 });
    assert_eq!(factors.overflow_guard, 1.0);

    let coords = point_coords(&engine.series()[0].primitives);
    assert_eq!(
        coords,
        vec![
            (20.0, 5.0),
            (40.0, 10.0),
            (60.0, 15.0),
            (80.0, 20.0),
            (100.0, 25.0)
        ]
    );
    assert_eq!(engine.y_ceiling(), 100.0);
}

#[test]
fn scenario_two_growth_shrinks_prior_draw_and_rewrites_readings() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), scenario_config()).expect("engine init");
    engine
        .draw(&[10.0, 20.0, 30.0, 40.0, 50.0], SeriesStyleKind::Line)
        .expect("first draw");
    let before = point_coords(&engine.series()[0].primitives);

    let outcome = engine
        .draw(&[30.0, 60.0, 90.0, 120.0, 150.0], SeriesStyleKind::Line)
        .expect("second draw");
    let DrawOutcome::Drawn { scaling, .. } = outcome else {
        panic!("expected drawn outcome");
    };
    let ScalingOutcome::Grown {
        previous_ceiling,
        ceiling,
        shrink,
    } = scaling
    else {
        panic!("expected ceiling growth");
    };
    assert_eq!(previous_ceiling, 100.0);
    assert_eq!(ceiling, 150.0);
    assert_relative_eq!(shrink, 100.0 / 150.0);

    assert_eq!(engine.y_ceiling(), 150.0);
    assert_eq!(engine.y_readings(), &[30.0, 60.0, 90.0, 120.0, 150.0]);

    let after = point_coords(&engine.series()[0].primitives);
    for ((x_before, y_before), (x_after, y_after)) in before.iter().zip(&after) {
        assert_eq!(x_before, x_after);
        assert_relative_eq!(*y_after, y_before * 100.0 / 150.0, epsilon = 1e-9);
    }

    // 150 exceeds the 50px surface, so the overflow guard maps it to the top.
    let current = point_coords(&engine.series()[1].primitives);
    let ys: Vec<f64> = current.iter().map(|(_, y)| *y).collect();
    for (y, expected) in ys.iter().zip([10.0, 20.0, 30.0, 40.0, 50.0]) {
        assert_relative_eq!(*y, expected, epsilon = 1e-9);
    }
}

#[test]
fn scenario_two_rebuilds_prior_polyline_from_corrected_points() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), scenario_config()).expect("engine init");
    engine
        .draw(&[10.0, 20.0, 30.0, 40.0, 50.0], SeriesStyleKind::Line)
        .expect("first draw");
    let original_length = engine.series()[0]
        .polyline
        .as_ref()
        .expect("polyline")
        .length;

    engine
        .draw(&[30.0, 60.0, 90.0, 120.0, 150.0], SeriesStyleKind::Line)
        .expect("second draw");

    let series = &engine.series()[0];
    let polyline = series.polyline.as_ref().expect("polyline");
    assert_eq!(polyline.points[0], (0.0, 0.0));
    assert_eq!(&polyline.points[1..], point_coords(&series.primitives).as_slice());
    assert!(polyline.length <= original_length);
    assert_eq!(
        polyline.length,
        blockline::core::polyline_length(&polyline.points)
    );
}

#[test]
fn scenario_three_block_heights_match_line_values_within_rounding() {
    let data = [7.0, 13.0, 29.0, 41.0, 33.0];

    let mut line =
        ChartEngine::new(NullRenderer::default(), scenario_config()).expect("engine init");
    line.draw(&data, SeriesStyleKind::Line).expect("line draw");
    let mut block =
        ChartEngine::new(NullRenderer::default(), scenario_config()).expect("engine init");
    block.draw(&data, SeriesStyleKind::Block).expect("block draw");

    let line_ys: Vec<f64> = point_coords(&line.series()[0].primitives)
        .into_iter()
        .map(|(_, y)| y)
        .collect();
    for (primitive, line_y) in block.series()[0].primitives.iter().zip(line_ys) {
        let SeriesPrimitive::Block(rect) = primitive else {
            panic!("expected blocks");
        };
        assert!((rect.height - line_y).abs() <= 0.5);
        assert_eq!(rect.height, rect.height.round());
    }
}

#[test]
fn rtl_mirrors_positions_and_keeps_axis_values_in_tooltips() {
    let data = [10.0, 20.0, 30.0];
    let mut ltr =
        ChartEngine::new(NullRenderer::default(), scenario_config()).expect("engine init");
    let mut rtl = ChartEngine::new(
        NullRenderer::default(),
        scenario_config().with_direction(ChartDirection::Rtl),
    )
    .expect("engine init");
    ltr.draw(&data, SeriesStyleKind::Line).expect("ltr draw");
    rtl.draw(&data, SeriesStyleKind::Line).expect("rtl draw");

    for (l, r) in ltr.series()[0]
        .primitives
        .iter()
        .zip(&rtl.series()[0].primitives)
    {
        let (SeriesPrimitive::Point(l), SeriesPrimitive::Point(r)) = (l, r) else {
            panic!("expected points");
        };
        assert_relative_eq!(r.x, 100.0 - l.x);
        assert_eq!(r.y, l.y);
        assert_eq!(r.tooltip, l.tooltip);
    }

    let SeriesPrimitive::Point(first) = &rtl.series()[0].primitives[0] else {
        panic!("expected points");
    };
    assert_eq!(first.tooltip.x_text, "x: 10");
    assert_eq!(first.tooltip.y_text, "y: 10");
    let anchor = rtl.series()[0]
        .polyline
        .as_ref()
        .and_then(|p| p.anchor())
        .expect("anchor");
    assert_eq!(anchor, (100.0, 0.0));
}
