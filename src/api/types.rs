use serde::{Deserialize, Serialize};

/// Body of `POST /api/budget`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRequest {
    pub email: String,
    pub income: f64,
    pub expenses: f64,
    pub savings_goal: f64,
}

/// Recommendation returned for a submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetResult {
    #[serde(deserialize_with = "amount::deserialize")]
    pub savings: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub recommended_savings: f64,
    /// Inflation rate in percent, absent when the lookup failed upstream.
    #[serde(default, deserialize_with = "amount::deserialize_optional")]
    pub inflation: Option<f64>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Body of `POST /api/budget/history`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRequest<'a> {
    pub email: &'a str,
}

/// One stored submission.
///
/// Rows are shown as stored, so an amount that is missing, null or not a
/// number decodes to `None` instead of rejecting the whole history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub income: Option<f64>,
    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub expenses: Option<f64>,
    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub savings: Option<f64>,
    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub recommended_savings: Option<f64>,
    #[serde(default)]
    pub message: String,
}

/// Amounts arrive as JSON numbers or as the raw numeric strings older
/// clients posted. An empty string reads as zero, except in lenient mode
/// where it reads as absent.
mod amount {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    impl Raw {
        fn into_f64<E: Error>(self) -> Result<f64, E> {
            match self {
                Raw::Number(n) => Ok(n),
                Raw::Text(s) if s.trim().is_empty() => Ok(0.0),
                Raw::Text(s) => s
                    .trim()
                    .parse()
                    .map_err(|_| E::custom(format!("invalid amount {s:?}"))),
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Raw::deserialize(d)?.into_f64()
    }

    pub fn deserialize_optional<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<Raw>::deserialize(d)?
            .map(Raw::into_f64::<D::Error>)
            .transpose()
    }

    pub fn deserialize_lenient<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<f64>, D::Error> {
        let value = serde_json::Value::deserialize(d)?;
        Ok(match value {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}
