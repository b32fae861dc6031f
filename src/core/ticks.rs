/// Indices of the label axis that get a visible tick.
///
/// Every `ceil(len / max_ticks)`-th label is kept starting from the first, so
/// the result never exceeds `max_ticks`. `None` shows every label.
#[must_use]
pub fn select_label_ticks(len: usize, max_ticks: Option<usize>) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let stride = match max_ticks {
        Some(0) => return Vec::new(),
        Some(limit) => len.div_ceil(limit).max(1),
        None => 1,
    };
    (0..len).step_by(stride).collect()
}

/// Evenly spaced value ticks covering `min..=max`, both ends included.
#[must_use]
pub fn value_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if count == 1 || min == max {
        return vec![min];
    }

    let last = (count - 1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / last;
            min * (1.0 - t) + max * t
        })
        .collect()
}

/// Formats a value tick with precision suited to the visible span.
#[must_use]
pub fn format_value_tick(value: f64, span: f64) -> String {
    let span = span.abs();
    let decimals = if span >= 100.0 {
        0
    } else if span >= 1.0 {
        1
    } else {
        3
    };
    format!("{value:.decimals$}")
}
