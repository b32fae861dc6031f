#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use stream_chart::ChartError;
use stream_chart::api::StreamingChart;
use stream_chart::core::{ChartState, SeriesSpec, Viewport};
use stream_chart::platform::RegionContainer;
use stream_chart::render::{
    CairoContextRenderer, CairoRenderer, FrameEngine, FrameStyle, RenderFrame, Renderer,
    build_frame,
};

fn example_series() -> Vec<SeriesSpec> {
    vec![
        SeriesSpec::new("A", "#ff0000"),
        SeriesSpec::new("B", "#00ff00"),
    ]
}

#[test]
fn cairo_renderer_rejects_zero_sized_frame() {
    let mut renderer = CairoRenderer::new();
    let err = renderer
        .render(&RenderFrame::new(Viewport::new(0, 480)))
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidDimensions { .. }));
    assert!(renderer.surface().is_none());
}

#[test]
fn png_export_requires_a_rendered_frame() {
    let renderer = CairoRenderer::new();
    let mut png = Vec::new();
    assert!(matches!(
        renderer.write_png(&mut png),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn cairo_renderer_paints_streamed_samples() {
    let mut container = RegionContainer::new();
    let mut chart = StreamingChart::new(
        &mut container,
        FrameEngine::new(CairoRenderer::new()),
        &example_series(),
        400,
        200,
    )
    .expect("chart init");
    chart.render_values(1u64, &[1.0, 2.0]).expect("render");
    chart.render_values(2u64, &[3.0, 4.0]).expect("render");

    let stats = chart.handle().renderer().stats();
    assert_eq!(stats.lines, 11);
    assert_eq!(stats.rects, 6);
    assert_eq!(stats.texts, 9);

    let mut png = Vec::new();
    chart
        .handle()
        .renderer()
        .write_png(&mut png)
        .expect("png export");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn offscreen_surface_follows_chart_resize() {
    let mut container = RegionContainer::new();
    let mut chart = StreamingChart::new(
        &mut container,
        FrameEngine::new(CairoRenderer::new()),
        &example_series(),
        500,
        200,
    )
    .expect("chart init");
    chart.render_values(1u64, &[1.0, 2.0]).expect("render");

    let surface = chart.handle().renderer().surface().expect("surface");
    assert_eq!((surface.width(), surface.height()), (500, 200));

    assert!(chart.resize(800, 400).expect("resize"));
    chart.render_values(2u64, &[3.0, 4.0]).expect("render");

    let surface = chart.handle().renderer().surface().expect("surface");
    assert_eq!((surface.width(), surface.height()), (800, 400));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut data = ChartState::from_specs(&[SeriesSpec::new("A", "#3366cc")]);
    data.push_sample(0u64.into(), &[Some(1.0)]).expect("push");
    data.push_sample(1u64.into(), &[Some(2.0)]).expect("push");
    let (frame, _) = build_frame(
        Viewport::new(320, 160),
        &data,
        &Default::default(),
        FrameStyle::default(),
    )
    .expect("frame");

    let mut renderer = CairoRenderer::new();
    let surface = ImageSurface::create(Format::ARgb32, 320, 160).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");
    assert_eq!(renderer.stats().texts, frame.texts.len());
    assert!(renderer.surface().is_none());
}
