mod options;
mod snapshot;
mod streaming_chart;

pub use options::{
    AxisOptions, ChartOptions, ChartOptionsPatch, DEFAULT_MAX_X_TICKS, LegendOptions, ScaleLabel,
};
pub use snapshot::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1, SeriesSnapshot,
};
pub use streaming_chart::{StreamingChart, StreamingChartConfig};
