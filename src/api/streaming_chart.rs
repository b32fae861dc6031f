use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    ChartState, RetentionPolicy, SampleSource, SeriesBuffer, SeriesSpec, TickLabel, Viewport,
    collect_point,
};
use crate::error::ChartResult;
use crate::platform::{DEFAULT_REGION, DrawingSurface, SurfaceContainer};
use crate::render::{ChartEngine, ChartHandle};

use super::{ChartOptions, ChartSnapshot};

/// Construction settings for [`StreamingChart::with_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Container region the surface is appended to.
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub retention: RetentionPolicy,
}

impl Default for StreamingChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            region: default_region(),
            options: ChartOptions::default(),
            retention: RetentionPolicy::default(),
        }
    }
}

impl StreamingChartConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }
}

fn default_width() -> u32 {
    500
}

fn default_height() -> u32 {
    200
}

fn default_region() -> String {
    DEFAULT_REGION.to_owned()
}

/// Line chart fed one sample per tick.
///
/// Owns its drawing surface, the buffered series and the engine handle; all
/// three live and die together. Every mutation goes through `&mut self`, so
/// callers serialize `render`/`reset` by construction.
#[derive(Debug)]
pub struct StreamingChart<H: ChartHandle> {
    surface: DrawingSurface,
    region: String,
    state: ChartState,
    options: ChartOptions,
    retention: RetentionPolicy,
    handle: H,
}

impl<H: ChartHandle> StreamingChart<H> {
    /// Creates a chart of `width × height` pixels in the default region.
    pub fn new<C, E>(
        container: &mut C,
        engine: E,
        series: &[SeriesSpec],
        width: u32,
        height: u32,
    ) -> ChartResult<Self>
    where
        C: SurfaceContainer + ?Sized,
        E: ChartEngine<Handle = H>,
    {
        Self::with_config(
            container,
            engine,
            series,
            StreamingChartConfig::new(width, height),
        )
    }

    /// Creates a chart, appends its surface to `container` and hands the
    /// empty data to `engine`.
    ///
    /// Dimensions and retention are validated before the container is touched.
    pub fn with_config<C, E>(
        container: &mut C,
        engine: E,
        series: &[SeriesSpec],
        config: StreamingChartConfig,
    ) -> ChartResult<Self>
    where
        C: SurfaceContainer + ?Sized,
        E: ChartEngine<Handle = H>,
    {
        let viewport = Viewport::new(config.width, config.height).validated()?;
        let retention = config.retention.validate()?;

        let surface = DrawingSurface::new(viewport)?;
        container.append_child(&config.region, &surface)?;
        let context = surface.context_2d();

        let state = ChartState::from_specs(series);
        let handle = engine.create(context, &state, &config.options)?;
        debug!(
            surface = surface.id().get(),
            region = %config.region,
            width = viewport.width,
            height = viewport.height,
            series = series.len(),
            "streaming chart created"
        );

        Ok(Self {
            surface,
            region: config.region,
            state,
            options: config.options,
            retention,
            handle,
        })
    }

    /// Appends one sample per series under `label` and redraws.
    ///
    /// `point` must have exactly one slot per series; otherwise
    /// `SeriesLengthMismatch` is returned and nothing changes.
    pub fn render(&mut self, label: impl Into<TickLabel>, point: &[Option<f64>]) -> ChartResult<()> {
        if let Err(err) = self.state.push_sample(label.into(), point) {
            warn!(error = %err, "rejecting sample");
            return Err(err);
        }
        let evicted = self.state.apply_retention(self.retention);
        trace!(count = self.state.len(), evicted, "append sample");
        self.handle.redraw(&self.state)
    }

    /// [`render`](Self::render) for samples without gaps.
    pub fn render_values(&mut self, label: impl Into<TickLabel>, values: &[f64]) -> ChartResult<()> {
        let point: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        self.render(label, &point)
    }

    /// Reads the latest value of each series' variable from `source` and
    /// renders it. Variables without samples contribute `0`.
    pub fn render_from<S>(&mut self, label: impl Into<TickLabel>, source: &S) -> ChartResult<()>
    where
        S: SampleSource + ?Sized,
    {
        let point = collect_point(self.state.series(), source);
        self.render(label, &point)
    }

    /// Drops all buffered samples, keeping series labels and colors, and
    /// redraws the empty chart.
    pub fn reset(&mut self) -> ChartResult<()> {
        let cleared = self.state.len();
        self.state.clear();
        debug!(cleared, "streaming chart reset");
        self.handle.redraw(&self.state)
    }

    /// Resizes the surface when the chart is responsive.
    ///
    /// Returns `Ok(false)` without changes when responsiveness is off.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<bool> {
        let viewport = Viewport::new(width, height).validated()?;
        if !self.options.responsive {
            debug!(width, height, "ignoring resize on non-responsive chart");
            return Ok(false);
        }

        self.surface.resize(viewport)?;
        self.handle.resize(viewport)?;
        debug!(width, height, "streaming chart resized");
        self.handle.redraw(&self.state)?;
        Ok(true)
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn labels(&self) -> &[TickLabel] {
        self.state.labels()
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesBuffer] {
        self.state.series()
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    #[must_use]
    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot::capture(self.surface.viewport(), &self.state)
    }
}
