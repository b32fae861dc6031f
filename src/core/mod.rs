pub mod color;
pub mod label;
pub mod sample_source;
pub mod scale;
pub mod series;
pub mod state;
pub mod ticks;
pub mod types;

pub use color::{ColorToken, FALLBACK_FILL_COLOR, FILL_ALPHA, derive_fill_color};
pub use label::TickLabel;
pub use sample_source::{DataCollector, MISSING_SAMPLE_VALUE, SampleSource, collect_point};
pub use scale::LinearScale;
pub use series::{SeriesBuffer, SeriesSpec, series_specs_from_json, series_specs_to_json};
pub use state::{ChartState, RetentionPolicy};
pub use types::{PixelRect, Viewport};
