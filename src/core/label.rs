use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the shared X axis.
///
/// Simulation hosts usually label samples with their step counter; wall-clock
/// feeds use timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickLabel {
    Step(u64),
    Time(DateTime<Utc>),
    Text(String),
}

impl fmt::Display for TickLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(step) => write!(f, "{step}"),
            Self::Time(time) => write!(f, "{}", time.format("%H:%M:%S")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for TickLabel {
    fn from(step: u64) -> Self {
        Self::Step(step)
    }
}

impl From<DateTime<Utc>> for TickLabel {
    fn from(time: DateTime<Utc>) -> Self {
        Self::Time(time)
    }
}

impl From<String> for TickLabel {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TickLabel {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn labels_display_by_kind() {
        assert_eq!(TickLabel::from(42).to_string(), "42");
        assert_eq!(TickLabel::from("warmup").to_string(), "warmup");
        let time = Utc
            .with_ymd_and_hms(2024, 3, 1, 7, 5, 9)
            .single()
            .expect("valid time");
        assert_eq!(TickLabel::from(time).to_string(), "07:05:09");
    }
}
