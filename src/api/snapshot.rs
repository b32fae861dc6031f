use serde::{Deserialize, Serialize};

use crate::core::{ChartState, Viewport};
use crate::error::{ChartError, ChartResult};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable copy of one series buffer.
///
/// Gaps are written as `null`; non-finite samples as `"NaN"`, `"Infinity"`
/// or `"-Infinity"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub label: String,
    pub line_color: String,
    pub fill_color: String,
    #[serde(with = "sample_values")]
    pub values: Vec<Option<f64>>,
}

/// Point-in-time copy of a chart's data, for diagnostics and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub width: u32,
    pub height: u32,
    pub labels: Vec<String>,
    pub series: Vec<SeriesSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    #[must_use]
    pub fn capture(viewport: Viewport, state: &ChartState) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            labels: state.labels().iter().map(ToString::to_string).collect(),
            series: state
                .series()
                .iter()
                .map(|buffer| SeriesSnapshot {
                    label: buffer.label().to_owned(),
                    line_color: buffer.line_color().to_owned(),
                    fill_color: buffer.fill_color().to_owned(),
                    values: buffer.values().to_vec(),
                })
                .collect(),
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

mod sample_values {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    const NAN: &str = "NaN";
    const POS_INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum WireSample {
        Number(f64),
        Special(String),
    }

    impl From<f64> for WireSample {
        fn from(value: f64) -> Self {
            if value.is_nan() {
                Self::Special(NAN.to_owned())
            } else if value == f64::INFINITY {
                Self::Special(POS_INFINITY.to_owned())
            } else if value == f64::NEG_INFINITY {
                Self::Special(NEG_INFINITY.to_owned())
            } else {
                Self::Number(value)
            }
        }
    }

    pub(super) fn serialize<S: Serializer>(
        values: &[Option<f64>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let wire: Vec<Option<WireSample>> = values.iter().map(|v| v.map(WireSample::from)).collect();
        wire.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Option<f64>>, D::Error> {
        let wire = Vec::<Option<WireSample>>::deserialize(deserializer)?;
        wire.into_iter()
            .map(|sample| match sample {
                None => Ok(None),
                Some(WireSample::Number(value)) => Ok(Some(value)),
                Some(WireSample::Special(token)) => match token.as_str() {
                    NAN => Ok(Some(f64::NAN)),
                    POS_INFINITY => Ok(Some(f64::INFINITY)),
                    NEG_INFINITY => Ok(Some(f64::NEG_INFINITY)),
                    other => Err(D::Error::custom(format!(
                        "unknown sample value token: {other:?}"
                    ))),
                },
            })
            .collect()
    }
}
