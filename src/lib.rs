//! stream-chart: a streaming line chart adapter.
//!
//! A [`StreamingChart`] owns a drawing surface, one value buffer per series
//! and a rendering-engine handle. Each tick appends one label and one value
//! per series, then asks the engine to redraw.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod platform;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartOptions, StreamingChart, StreamingChartConfig};
pub use crate::core::{SeriesSpec, TickLabel, derive_fill_color};
pub use error::{ChartError, ChartResult};
