#![cfg(feature = "cairo-backend")]

use blockline::ChartError;
use blockline::api::{ChartConfig, ChartEngine};
use blockline::core::{AxisSpec, SeriesStyleKind, Viewport};
use blockline::render::{CairoRenderer, Renderer, SurfaceMetrics};
use cairo::{Context, Format, ImageSurface};

fn config() -> ChartConfig {
    ChartConfig::new(
        Viewport::new(100.0, 50.0),
        AxisSpec::new(50.0, 5, "day"),
        AxisSpec::new(100.0, 5, "visits"),
    )
}

#[test]
fn cairo_renderer_rejects_invalid_size_and_margin() {
    let err = CairoRenderer::new(0, 50, 0.0).expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(CairoRenderer::new(100, -1, 0.0).is_err());
    assert!(CairoRenderer::new(100, 50, -1.0).is_err());
    assert!(CairoRenderer::new(100, 50, f64::NAN).is_err());
}

#[test]
fn cairo_measure_excludes_both_margins() {
    let renderer = CairoRenderer::new(140, 90, 20.0).expect("renderer");
    let metrics = renderer.measure().expect("measure");
    assert_eq!(metrics, SurfaceMetrics::new(100.0, 140.0));

    let cramped = CairoRenderer::new(30, 30, 20.0).expect("renderer");
    let err = cramped.measure().expect_err("no room left");
    assert!(matches!(err, ChartError::MeasurementUnavailable));
}

#[test]
fn cairo_renderer_draws_line_then_block_frames() {
    let renderer = CairoRenderer::new(140, 90, 20.0).expect("renderer");
    let mut engine = ChartEngine::new(renderer, config()).expect("engine init");

    engine
        .draw(&[10.0, 20.0, 30.0], SeriesStyleKind::Line)
        .expect("draw line");
    assert!(!engine.responsive().pending);
    assert_eq!(engine.responsive().font_size_px, 10.0);
    let stats = engine.renderer().last_stats();
    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.rects_drawn, 0);
    // Zero reading plus five readings per axis.
    assert_eq!(stats.texts_drawn, 11);

    engine
        .change_style(SeriesStyleKind::Block)
        .expect("change style");
    let stats = engine.renderer().last_stats();
    assert_eq!(stats.rects_drawn, 3);
    assert_eq!(stats.circles_drawn, 0);
    assert_eq!(stats.polylines_drawn, 0);
    assert_eq!(stats.lines_drawn, 2);
}

#[test]
fn cairo_margin_larger_than_surface_defers_adjustments() {
    let renderer = CairoRenderer::new(30, 30, 20.0).expect("renderer");
    let mut engine = ChartEngine::new(renderer, config()).expect("engine init");

    engine
        .draw(&[10.0], SeriesStyleKind::Line)
        .expect("draw must not fail");
    assert!(engine.responsive().pending);
    assert_eq!(engine.renderer().last_stats().circles_drawn, 1);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(140, 90, 20.0).expect("renderer");
    let mut engine = ChartEngine::new(renderer, config()).expect("engine init");
    engine
        .draw(&[10.0, 20.0], SeriesStyleKind::Block)
        .expect("draw");

    let surface = ImageSurface::create(Format::ARgb32, 140, 90).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().rects_drawn, 2);
    assert_eq!(renderer.last_stats().texts_drawn, 11);
}
