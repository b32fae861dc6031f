//! Pointer resolution for tooltips and hover highlighting.
//!
//! Both resolvers work on the plot layout the frame engine produced, so hosts
//! can translate raw pointer coordinates into sample indices without knowing
//! how the chart is laid out.

use serde::{Deserialize, Serialize};

use crate::core::{ChartState, LinearScale, PixelRect};
use crate::error::ChartResult;

/// Default hit radius, in pixels, for intersecting modes.
pub const DEFAULT_HIT_RADIUS_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionMode {
    /// Every series' sample at the label column closest to the pointer.
    Index,
    /// The single drawn point closest to the pointer.
    Nearest,
}

/// Mode plus intersect flag, as used by both tooltip and hover settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionOptions {
    pub mode: InteractionMode,
    /// When set, only points within the hit radius of the pointer match.
    pub intersect: bool,
}

impl InteractionOptions {
    #[must_use]
    pub const fn new(mode: InteractionMode, intersect: bool) -> Self {
        Self { mode, intersect }
    }
}

/// Plot geometry shared by rendering and pointer resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub plot: PixelRect,
    pub value_scale: LinearScale,
}

impl PlotLayout {
    /// X pixel of the `index`-th label column out of `len`.
    #[must_use]
    pub fn column_x(&self, index: usize, len: usize) -> f64 {
        if len <= 1 {
            return self.plot.x + self.plot.width / 2.0;
        }
        self.plot.x + self.plot.width * index as f64 / (len - 1) as f64
    }

    /// Label column closest to pixel `x`, clamped to the plot.
    #[must_use]
    pub fn nearest_column(&self, x: f64, len: usize) -> Option<usize> {
        if len == 0 || !x.is_finite() {
            return None;
        }
        if len == 1 {
            return Some(0);
        }
        let normalized = ((x - self.plot.x) / self.plot.width).clamp(0.0, 1.0);
        Some((normalized * (len - 1) as f64).round() as usize)
    }
}

/// One matched sample.
#[derive(Debug, Clone, PartialEq)]
pub struct PointHit {
    pub series_index: usize,
    pub sample_index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Resolves which samples a pointer at `(x, y)` refers to.
///
/// Results are ordered by series index. An empty vector means nothing matched.
pub fn resolve_pointer(
    layout: &PlotLayout,
    state: &ChartState,
    x: f64,
    y: f64,
    options: InteractionOptions,
    hit_radius_px: f64,
) -> ChartResult<Vec<PointHit>> {
    if !layout.plot.contains(x, y) {
        return Ok(Vec::new());
    }
    let hits = drawn_points(layout, state);

    match options.mode {
        InteractionMode::Index => {
            let Some(column) = layout.nearest_column(x, state.len()) else {
                return Ok(Vec::new());
            };
            if options.intersect
                && !hits.iter().any(|hit| within(hit, x, y, hit_radius_px))
            {
                return Ok(Vec::new());
            }
            Ok(hits
                .into_iter()
                .filter(|hit| hit.sample_index == column)
                .collect())
        }
        InteractionMode::Nearest => {
            let nearest = hits
                .into_iter()
                .filter(|hit| !options.intersect || within(hit, x, y, hit_radius_px))
                .min_by(|a, b| distance(a, x, y).total_cmp(&distance(b, x, y)));
            Ok(nearest.into_iter().collect())
        }
    }
}

fn drawn_points(layout: &PlotLayout, state: &ChartState) -> Vec<PointHit> {
    let len = state.len();
    let mut hits = Vec::new();
    for (series_index, buffer) in state.series().iter().enumerate() {
        for (sample_index, value) in buffer.values().iter().enumerate() {
            let Some(value) = value.filter(|v| v.is_finite()) else {
                continue;
            };
            let Ok(y) = layout.value_scale.to_pixel(value) else {
                continue;
            };
            hits.push(PointHit {
                series_index,
                sample_index,
                value,
                x: layout.column_x(sample_index, len),
                y,
            });
        }
    }
    hits
}

fn distance(hit: &PointHit, x: f64, y: f64) -> f64 {
    (hit.x - x).hypot(hit.y - y)
}

fn within(hit: &PointHit, x: f64, y: f64, radius: f64) -> bool {
    distance(hit, x, y) <= radius
}
