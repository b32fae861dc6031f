use stream_chart::api::{
    AxisOptions, ChartOptions, ChartOptionsPatch, DEFAULT_MAX_X_TICKS, LegendOptions, ScaleLabel,
    StreamingChartConfig,
};
use stream_chart::core::RetentionPolicy;
use stream_chart::interaction::{InteractionMode, InteractionOptions};

#[test]
fn defaults_match_fixed_chart_policy() {
    let options = ChartOptions::default();

    assert!(options.responsive);
    assert_eq!(options.tooltips.mode, InteractionMode::Index);
    assert!(!options.tooltips.intersect);
    assert_eq!(options.hover.mode, InteractionMode::Nearest);
    assert!(options.hover.intersect);

    assert!(options.x_axis.display);
    assert!(options.x_axis.scale_label.display);
    assert_eq!(options.x_axis.max_ticks_limit, Some(DEFAULT_MAX_X_TICKS));
    assert_eq!(DEFAULT_MAX_X_TICKS, 11);

    assert!(options.y_axis.display);
    assert!(options.y_axis.scale_label.display);
    assert_eq!(options.y_axis.max_ticks_limit, None);
    assert!(options.legend.display);
}

#[test]
fn merged_returns_new_value_and_leaves_original_untouched() {
    let base = ChartOptions::default();
    let patch = ChartOptionsPatch {
        responsive: Some(false),
        hover: Some(InteractionOptions::new(InteractionMode::Index, true)),
        ..ChartOptionsPatch::default()
    };

    let merged = base.merged(&patch);

    assert!(!merged.responsive);
    assert_eq!(merged.hover.mode, InteractionMode::Index);
    assert_eq!(merged.tooltips, base.tooltips);
    assert_eq!(merged.x_axis, base.x_axis);
    assert_eq!(base, ChartOptions::default());
    assert_eq!(base.merged(&ChartOptionsPatch::default()), base);
}

#[test]
fn builders_compose() {
    let options = ChartOptions::default()
        .with_y_axis(AxisOptions {
            scale_label: ScaleLabel {
                display: true,
                label_string: Some("agents".to_owned()),
            },
            ..AxisOptions::default()
        })
        .with_legend(LegendOptions { display: false });

    assert_eq!(
        options.y_axis.scale_label.label_string.as_deref(),
        Some("agents")
    );
    assert!(!options.legend.display);
    assert_eq!(options.x_axis.max_ticks_limit, Some(11));
}

#[test]
fn empty_json_deserializes_to_defaults() {
    let options: ChartOptions = serde_json::from_str("{}").expect("options json");
    assert_eq!(options, ChartOptions::default());

    let options: ChartOptions =
        serde_json::from_str(r#"{"xAxis":{"maxTicksLimit":5},"hover":{"mode":"index","intersect":false}}"#)
            .expect("partial options json");
    assert_eq!(options.x_axis.max_ticks_limit, Some(5));
    assert!(options.x_axis.display);
    assert_eq!(options.hover, InteractionOptions::new(InteractionMode::Index, false));
    assert_eq!(options.tooltips, ChartOptions::default().tooltips);
}

#[test]
fn chart_config_round_trips_through_json() {
    let config = StreamingChartConfig::new(800, 300)
        .with_region("plots")
        .with_retention(RetentionPolicy::Window { capacity: 120 });

    let json = serde_json::to_string(&config).expect("serialize");
    let parsed: StreamingChartConfig = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, config);

    let defaults: StreamingChartConfig = serde_json::from_str("{}").expect("parse defaults");
    assert_eq!(defaults, StreamingChartConfig::default());
}
