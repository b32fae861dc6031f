use serde::{Deserialize, Serialize};

use crate::core::label::TickLabel;
use crate::core::series::{SeriesBuffer, SeriesSpec};
use crate::error::{ChartError, ChartResult};

/// How many samples a chart keeps before evicting the oldest ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RetentionPolicy {
    /// Buffers grow until `reset`.
    #[default]
    Unbounded,
    /// Keeps only the newest `capacity` samples.
    Window { capacity: usize },
}

impl RetentionPolicy {
    pub fn validate(self) -> ChartResult<Self> {
        if let Self::Window { capacity: 0 } = self {
            return Err(ChartError::InvalidData(
                "retention window capacity must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Shared label axis plus one buffer per series.
///
/// `labels.len()` equals every buffer's length at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    labels: Vec<TickLabel>,
    series: Vec<SeriesBuffer>,
}

impl ChartState {
    #[must_use]
    pub fn from_specs(specs: &[SeriesSpec]) -> Self {
        Self {
            labels: Vec::new(),
            series: specs.iter().map(SeriesBuffer::from_spec).collect(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[TickLabel] {
        &self.labels
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesBuffer] {
        &self.series
    }

    /// Number of samples on the label axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Appends one label and one value per series.
    ///
    /// A point whose length differs from the series count is rejected before
    /// anything is touched.
    pub fn push_sample(&mut self, label: TickLabel, point: &[Option<f64>]) -> ChartResult<()> {
        if point.len() != self.series.len() {
            return Err(ChartError::SeriesLengthMismatch {
                expected: self.series.len(),
                actual: point.len(),
            });
        }

        self.labels.push(label);
        for (buffer, value) in self.series.iter_mut().zip(point) {
            buffer.values.push(*value);
        }
        Ok(())
    }

    /// Drops the oldest samples so at most `policy` allows remain.
    ///
    /// Returns how many samples were evicted.
    pub fn apply_retention(&mut self, policy: RetentionPolicy) -> usize {
        let RetentionPolicy::Window { capacity } = policy else {
            return 0;
        };
        let excess = self.labels.len().saturating_sub(capacity);
        if excess == 0 {
            return 0;
        }

        self.labels.drain(..excess);
        for buffer in &mut self.series {
            buffer.values.drain(..excess);
        }
        excess
    }

    /// Empties labels and values in place; series metadata is kept.
    pub fn clear(&mut self) {
        self.labels.clear();
        for buffer in &mut self.series {
            buffer.values.clear();
        }
    }

    /// Finite `(min, max)` over all buffered values, ignoring gaps.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|buffer| buffer.values.iter().copied().flatten())
            .filter(|value| value.is_finite())
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}
