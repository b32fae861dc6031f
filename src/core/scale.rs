use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel range.
///
/// The pixel range may be descending (`range_start > range_end`), which is how
/// value axes grow upwards on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds a domain around buffered data, widening degenerate ranges.
    pub fn padded_from_range(
        value_range: Option<(f64, f64)>,
        range: (f64, f64),
    ) -> ChartResult<Self> {
        let (min, max) = match value_range {
            None => (0.0, 1.0),
            Some((min, max)) if min == max => {
                let pad = if min == 0.0 {
                    1.0
                } else {
                    (min.abs() * 0.1).max(f64::MIN_POSITIVE)
                };
                (
                    (min - pad).max(f64::MIN),
                    (max + pad).min(f64::MAX),
                )
            }
            Some(bounds) => bounds,
        };
        Self::new((min, max), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        // Halved operands keep the span finite for domains wider than f64::MAX.
        let normalized = (value / 2.0 - self.domain_start / 2.0)
            / (self.domain_end / 2.0 - self.domain_start / 2.0);
        let pixel = self.range_start + normalized * (self.range_end - self.range_start);
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value {value} does not map to a finite pixel"
            )));
        }
        Ok(pixel)
    }

    pub fn from_pixel(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Err(ChartError::InvalidData(
                "scale range must be non-zero to invert".to_owned(),
            ));
        }

        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start * (1.0 - normalized) + self.domain_end * normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_range_maps_larger_values_higher() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("scale");
        assert_eq!(scale.to_pixel(0.0).expect("px"), 100.0);
        assert_eq!(scale.to_pixel(10.0).expect("px"), 0.0);
        assert_eq!(scale.from_pixel(50.0).expect("value"), 5.0);
    }

    #[test]
    fn degenerate_data_range_is_widened() {
        let scale = LinearScale::padded_from_range(Some((5.0, 5.0)), (0.0, 1.0)).expect("scale");
        let (min, max) = scale.domain();
        assert!(min < 5.0 && max > 5.0);

        let empty = LinearScale::padded_from_range(None, (0.0, 1.0)).expect("scale");
        assert_eq!(empty.domain(), (0.0, 1.0));
    }

    #[test]
    fn extreme_domains_map_to_finite_pixels() {
        let wide = LinearScale::new((-1e308, 1e308), (100.0, 0.0)).expect("scale");
        assert_eq!(wide.to_pixel(-1e308).expect("px"), 100.0);
        assert_eq!(wide.to_pixel(1e308).expect("px"), 0.0);
        assert_eq!(wide.to_pixel(0.0).expect("px"), 50.0);
        assert_eq!(wide.from_pixel(0.0).expect("value"), 1e308);

        let saturated =
            LinearScale::padded_from_range(Some((f64::MAX, f64::MAX)), (100.0, 0.0)).expect("scale");
        let (min, max) = saturated.domain();
        assert!(min < f64::MAX && max == f64::MAX);
        assert!(saturated.to_pixel(f64::MAX).expect("px").is_finite());

        let floor =
            LinearScale::padded_from_range(Some((f64::MIN, f64::MIN)), (100.0, 0.0)).expect("scale");
        assert_eq!(floor.domain().0, f64::MIN);
    }
}
