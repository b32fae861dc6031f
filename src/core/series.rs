use serde::{Deserialize, Serialize};

use crate::core::color::derive_fill_color;
use crate::error::{ChartError, ChartResult};

/// Caller-supplied description of one tracked line.
///
/// The wire names match the JSON objects hosts already emit
/// (`{"Label": ..., "Color": ...}`); lowercase keys are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSpec {
    #[serde(rename = "Label", alias = "label")]
    pub label: String,
    #[serde(rename = "Color", alias = "color")]
    pub color: String,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Value buffer for one series.
///
/// Label and colors are fixed at creation; only `values` changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBuffer {
    label: String,
    line_color: String,
    fill_color: String,
    pub(crate) values: Vec<Option<f64>>,
}

impl SeriesBuffer {
    #[must_use]
    pub fn from_spec(spec: &SeriesSpec) -> Self {
        Self {
            label: spec.label.clone(),
            line_color: spec.color.clone(),
            fill_color: derive_fill_color(&spec.color),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn line_color(&self) -> &str {
        &self.line_color
    }

    #[must_use]
    pub fn fill_color(&self) -> &str {
        &self.fill_color
    }

    /// Buffered samples, oldest first. `None` marks a gap.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent sample, if any was recorded.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }
}

/// Parses a JSON array of series specs.
pub fn series_specs_from_json(input: &str) -> ChartResult<Vec<SeriesSpec>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse series specs: {e}")))
}

/// Serializes series specs with the `Label` / `Color` wire names.
pub fn series_specs_to_json(specs: &[SeriesSpec]) -> ChartResult<String> {
    serde_json::to_string(specs)
        .map_err(|e| ChartError::InvalidData(format!("failed to serialize series specs: {e}")))
}
