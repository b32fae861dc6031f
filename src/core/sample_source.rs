use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::series::SeriesBuffer;

/// Value substituted for a series whose variable has no recorded samples.
pub const MISSING_SAMPLE_VALUE: f64 = 0.0;

/// Anything that can report the latest value of a named variable.
pub trait SampleSource {
    fn latest(&self, name: &str) -> Option<f64>;
}

/// Per-variable history recorded by a simulation, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataCollector {
    model_vars: IndexMap<String, Vec<f64>>,
}

impl DataCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a variable without samples.
    pub fn register(&mut self, name: impl Into<String>) {
        self.model_vars.entry(name.into()).or_default();
    }

    pub fn record(&mut self, name: impl Into<String>, value: f64) {
        self.model_vars.entry(name.into()).or_default().push(value);
    }

    #[must_use]
    pub fn history(&self, name: &str) -> Option<&[f64]> {
        self.model_vars.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.model_vars.keys().map(String::as_str)
    }
}

impl SampleSource for DataCollector {
    fn latest(&self, name: &str) -> Option<f64> {
        self.model_vars.get(name)?.last().copied()
    }
}

impl<S: SampleSource + ?Sized> SampleSource for &S {
    fn latest(&self, name: &str) -> Option<f64> {
        (**self).latest(name)
    }
}

/// Reads one value per series by label, substituting
/// [`MISSING_SAMPLE_VALUE`] for unknown or empty variables.
#[must_use]
pub fn collect_point<S: SampleSource + ?Sized>(
    series: &[SeriesBuffer],
    source: &S,
) -> Vec<Option<f64>> {
    series
        .iter()
        .map(|buffer| Some(source.latest(buffer.label()).unwrap_or(MISSING_SAMPLE_VALUE)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::SeriesSpec;

    #[test]
    fn collect_point_uses_latest_value_or_zero() {
        let series: Vec<SeriesBuffer> = [
            SeriesSpec::new("Infected", "#ff0000"),
            SeriesSpec::new("Recovered", "#00ff00"),
            SeriesSpec::new("Dead", "#000000"),
        ]
        .iter()
        .map(SeriesBuffer::from_spec)
        .collect();

        let mut collector = DataCollector::new();
        collector.record("Infected", 3.0);
        collector.record("Infected", 5.0);
        collector.register("Recovered");

        assert_eq!(
            collect_point(&series, &collector),
            vec![Some(5.0), Some(0.0), Some(0.0)]
        );
    }

    #[test]
    fn names_keep_registration_order() {
        let mut collector = DataCollector::new();
        collector.record("b", 1.0);
        collector.register("a");
        assert_eq!(collector.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(collector.history("b"), Some(&[1.0][..]));
    }
}
