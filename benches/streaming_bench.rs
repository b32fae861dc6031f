use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stream_chart::api::{StreamingChart, StreamingChartConfig};
use stream_chart::core::{ChartState, RetentionPolicy, SeriesSpec, Viewport, derive_fill_color};
use stream_chart::platform::RegionContainer;
use stream_chart::render::{FrameEngine, FrameStyle, NullRenderer, build_frame};

fn specs() -> Vec<SeriesSpec> {
    vec![
        SeriesSpec::new("Susceptible", "#1f77b4"),
        SeriesSpec::new("Infected", "#d62728"),
        SeriesSpec::new("Recovered", "#2ca02c"),
    ]
}

fn bench_derive_fill_color(c: &mut Criterion) {
    c.bench_function("derive_fill_color", |b| {
        b.iter(|| {
            let _ = derive_fill_color(black_box("#d62728"));
            let _ = derive_fill_color(black_box("#zzzzzz"));
        })
    });
}

fn bench_windowed_render_1k(c: &mut Criterion) {
    c.bench_function("windowed_render_1k", |b| {
        b.iter(|| {
            let mut container = RegionContainer::new();
            let mut chart = StreamingChart::with_config(
                &mut container,
                FrameEngine::new(NullRenderer::default()),
                &specs(),
                StreamingChartConfig::new(800, 300)
                    .with_retention(RetentionPolicy::Window { capacity: 200 }),
            )
            .expect("chart init");
            for step in 0..1_000u64 {
                let t = step as f64;
                chart
                    .render_values(step, &[1_000.0 - t, t * 0.5, t * 0.25])
                    .expect("render");
            }
            black_box(chart.labels().len());
        })
    });
}

fn bench_frame_build_10k(c: &mut Criterion) {
    let mut data = ChartState::from_specs(&specs());
    for step in 0..10_000u64 {
        let t = step as f64;
        data.push_sample(step.into(), &[Some(t.sin()), Some(t.cos()), None])
            .expect("push");
    }
    let options = Default::default();

    c.bench_function("frame_build_10k", |b| {
        b.iter(|| {
            let _ = build_frame(
                Viewport::new(1920, 1080),
                black_box(&data),
                &options,
                FrameStyle::default(),
            )
            .expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_derive_fill_color,
    bench_windowed_render_1k,
    bench_frame_build_10k
);
criterion_main!(benches);
