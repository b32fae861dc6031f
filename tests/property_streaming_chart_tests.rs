use proptest::prelude::*;
use stream_chart::api::{StreamingChart, StreamingChartConfig};
use stream_chart::core::{RetentionPolicy, SeriesSpec};
use stream_chart::platform::RegionContainer;
use stream_chart::render::{FrameEngine, FrameHandle, NullRenderer};

fn specs(count: usize) -> Vec<SeriesSpec> {
    (0..count)
        .map(|i| SeriesSpec::new(format!("s{i}"), format!("#{:02x}{:02x}00", i * 10, 255 - i)))
        .collect()
}

fn chart(series: usize, retention: RetentionPolicy) -> StreamingChart<FrameHandle<NullRenderer>> {
    let mut container = RegionContainer::new();
    StreamingChart::with_config(
        &mut container,
        FrameEngine::new(NullRenderer::default()),
        &specs(series),
        StreamingChartConfig::new(640, 320).with_retention(retention),
    )
    .expect("chart init")
}

fn points(series: usize, max_len: usize) -> impl Strategy<Value = Vec<Vec<Option<f64>>>> {
    proptest::collection::vec(
        proptest::collection::vec(proptest::option::of(-1_000.0f64..1_000.0), series),
        0..max_len,
    )
}

proptest! {
    #[test]
    fn any_f64_sample_renders(
        samples in proptest::collection::vec(
            proptest::collection::vec(proptest::option::of(proptest::num::f64::ANY), 2),
            1..16,
        )
    ) {
        let mut chart = chart(2, RetentionPolicy::Unbounded);
        for (step, point) in samples.iter().enumerate() {
            prop_assert!(chart.render(step as u64, point).is_ok());
        }
        prop_assert_eq!(chart.labels().len(), samples.len());
    }

    #[test]
    fn every_buffer_grows_with_the_label_axis(
        (series, samples) in (0usize..5).prop_flat_map(|n| (Just(n), points(n, 24)))
    ) {
        let mut chart = chart(series, RetentionPolicy::Unbounded);
        for (step, point) in samples.iter().enumerate() {
            chart.render(step as u64, point).expect("render");
        }

        prop_assert_eq!(chart.labels().len(), samples.len());
        for (index, buffer) in chart.series().iter().enumerate() {
            let expected: Vec<Option<f64>> = samples.iter().map(|point| point[index]).collect();
            prop_assert_eq!(buffer.values(), expected.as_slice());
        }
    }

    #[test]
    fn reset_restores_fresh_behavior(
        (series, before, after) in (1usize..4).prop_flat_map(|n| (Just(n), points(n, 12), points(n, 12)))
    ) {
        let mut reused = chart(series, RetentionPolicy::Unbounded);
        for (step, point) in before.iter().enumerate() {
            reused.render(step as u64, point).expect("render");
        }
        reused.reset().expect("reset");

        let mut fresh = chart(series, RetentionPolicy::Unbounded);
        for (step, point) in after.iter().enumerate() {
            reused.render(step as u64, point).expect("render");
            fresh.render(step as u64, point).expect("render");
        }

        prop_assert_eq!(reused.state(), fresh.state());
    }

    #[test]
    fn windowed_chart_keeps_newest_samples_in_lockstep(
        capacity in 1usize..8,
        samples in points(2, 30)
    ) {
        let mut chart = chart(2, RetentionPolicy::Window { capacity });
        for (step, point) in samples.iter().enumerate() {
            chart.render(step as u64, point).expect("render");
        }

        let kept = samples.len().min(capacity);
        prop_assert_eq!(chart.labels().len(), kept);
        let newest = &samples[samples.len() - kept..];
        for (index, buffer) in chart.series().iter().enumerate() {
            let expected: Vec<Option<f64>> = newest.iter().map(|point| point[index]).collect();
            prop_assert_eq!(buffer.values(), expected.as_slice());
        }
    }
}
