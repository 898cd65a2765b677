// History domain model - past analyses returned by the service
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "hora")]
    pub hour: String,
    #[serde(rename = "temperatura")]
    pub temperature: f64,
    #[serde(rename = "vibracao")]
    pub vibration: f64,
    #[serde(rename = "risco", default)]
    pub risk_percent: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl HistoryEntry {
    pub fn new(hour: impl Into<String>, temperature: f64, vibration: f64) -> Self {
        Self {
            hour: hour.into(),
            temperature,
            vibration,
            risk_percent: None,
            status: None,
        }
    }
}

/// Envelope of `GET /historico`
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(rename = "historico", default)]
    pub entries: Vec<HistoryEntry>,
}
